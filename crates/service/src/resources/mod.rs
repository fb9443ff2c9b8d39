//! One descriptor per entity, plugged into [`crate::resource::ResourceService`].

pub mod customer;
pub mod vehicle;
pub mod user;
pub mod sale;

pub use customer::Customers;
pub use sale::Sales;
pub use user::Users;
pub use vehicle::Vehicles;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde_json::Value;

/// Decimals go out as plain JSON numbers.
pub(crate) fn number(d: &Decimal) -> Value {
    d.to_f64().map(Value::from).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decimals_become_numbers() {
        assert_eq!(number(&Decimal::from_str("85000.50").unwrap()), serde_json::json!(85000.5));
        assert_eq!(number(&Decimal::ZERO), serde_json::json!(0.0));
    }
}
