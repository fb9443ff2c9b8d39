//! Request payload access.
//!
//! A payload is the JSON object sent by the client. Anything that is not an
//! object is treated as empty. Every accessor distinguishes a missing key,
//! an explicit `null` and a value, so partial updates can tell "leave as is"
//! from "clear".

use std::str::FromStr;

use chrono::NaiveDate;
use models::Canonical;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{self, Set};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

pub const MISSING_FIELDS: &str = "Campos obrigatórios ausentes.";

/// Key state inside a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Field<T> {
    /// Value for a create: absent and null both yield `None`.
    pub fn optional(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Absent | Field::Null => None,
        }
    }

    /// Value for a required create field. Callers check presence first.
    pub fn required(self) -> Result<T, ServiceError> {
        match self {
            Field::Value(v) => Ok(v),
            Field::Absent | Field::Null => Err(ServiceError::Validation(MISSING_FIELDS.into())),
        }
    }

    /// Overwrite a non-nullable column; `null` is rejected.
    pub fn set_required(self, key: &str, slot: &mut ActiveValue<T>) -> Result<(), ServiceError>
    where
        T: Into<sea_orm::Value>,
    {
        match self {
            Field::Absent => Ok(()),
            Field::Null => Err(invalid_value(key)),
            Field::Value(v) => {
                *slot = Set(v);
                Ok(())
            }
        }
    }

    /// Overwrite a nullable column; `null` clears it.
    pub fn set_optional(self, slot: &mut ActiveValue<Option<T>>)
    where
        Option<T>: Into<sea_orm::Value>,
    {
        match self {
            Field::Absent => {}
            Field::Null => *slot = Set(None),
            Field::Value(v) => *slot = Set(Some(v)),
        }
    }
}

pub fn invalid_value(key: &str) -> ServiceError {
    ServiceError::Validation(format!("Valor inválido para o campo {key}."))
}

pub fn invalid_choice(key: &str) -> ServiceError {
    let mut chars = key.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    ServiceError::Validation(format!("{label} inválido."))
}

/// `null`, `false`, zero, `""`, `[]` and `{}` all count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_filled(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|v| !is_falsy(v))
    }

    /// Every key in `keys` is present with a non-falsy value.
    pub fn has_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|k| self.is_filled(k))
    }

    fn field(&self, key: &str) -> Field<&Value> {
        match self.0.get(key) {
            None => Field::Absent,
            Some(Value::Null) => Field::Null,
            Some(v) => Field::Value(v),
        }
    }

    fn parse<T>(&self, key: &str, conv: impl FnOnce(&Value) -> Option<T>) -> Result<Field<T>, ServiceError> {
        match self.field(key) {
            Field::Absent => Ok(Field::Absent),
            Field::Null => Ok(Field::Null),
            Field::Value(v) => conv(v).map(Field::Value).ok_or_else(|| invalid_value(key)),
        }
    }

    /// Strings as-is; numbers are accepted and rendered as text.
    pub fn text(&self, key: &str) -> Result<Field<String>, ServiceError> {
        self.parse(key, |v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn decimal(&self, key: &str) -> Result<Field<Decimal>, ServiceError> {
        self.parse(key, |v| match v {
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) => parse_decimal(s.trim()),
            _ => None,
        })
    }

    pub fn int(&self, key: &str) -> Result<Field<i32>, ServiceError> {
        self.parse(key, |v| match v {
            Value::Number(n) => n.as_i64().and_then(|i| i32::try_from(i).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// `YYYY-MM-DD`.
    pub fn date(&self, key: &str) -> Result<Field<NaiveDate>, ServiceError> {
        self.parse(key, |v| v.as_str().and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
    }

    /// Enum member by free text. Unmatched text reports the field itself as invalid.
    pub fn choice<E: Canonical>(&self, key: &str) -> Result<Field<E>, ServiceError> {
        match self.field(key) {
            Field::Absent => Ok(Field::Absent),
            Field::Null => Ok(Field::Null),
            Field::Value(v) => v
                .as_str()
                .and_then(E::normalize)
                .map(Field::Value)
                .ok_or_else(|| invalid_choice(key)),
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).ok().or_else(|| Decimal::from_scientific(text).ok())
}
