pub mod errors;
pub mod db;
pub mod enums;
pub mod normalize;
pub mod customer;
pub mod vehicle;
pub mod user;
pub mod sale;

pub use enums::{CustomerStatus, SaleStatus, UserRole, UserStatus, VehicleStatus, VehicleType};
pub use normalize::Canonical;

#[cfg(test)]
mod tests;
