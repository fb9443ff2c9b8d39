//! Free-text to enum matching.
//!
//! Input and canonical values are both folded (NFKD, combining marks removed,
//! lowercased) before comparison. Whitespace is kept as-is, so `"Disponivel "`
//! matches nothing.

use sea_orm::{ActiveEnum, Iterable};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Strip diacritics: `"Mecânico"` becomes `"Mecanico"`.
pub fn strip_accents(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

fn fold(text: &str) -> String {
    strip_accents(text).to_lowercase()
}

/// Closed enumerations stored as their canonical text.
pub trait Canonical: ActiveEnum<Value = String> {
    /// Match `text` against every member, ignoring case and accents.
    fn normalize(text: &str) -> Option<Self> {
        let wanted = fold(text);
        <Self as Iterable>::iter().find(|member| fold(&member.to_value()) == wanted)
    }

    fn canonical(&self) -> String {
        self.to_value()
    }
}

impl<T> Canonical for T where T: ActiveEnum<Value = String> {}
