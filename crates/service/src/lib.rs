//! Service layer: request validation and persistence workflow on top of `models`.
//! - `payload` reads client JSON with absent/null/value distinction.
//! - `resource` runs create/update/delete/list for any entity descriptor.
//! - `resources` holds the four descriptors.
//! - `auth` checks login credentials.

pub mod errors;
pub mod payload;
pub mod resource;
pub mod resources;
pub mod auth;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use payload::Payload;
pub use resource::{Operation, Resource, ResourceService};
