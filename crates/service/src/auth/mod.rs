//! Login: domain, repository and service layers.
//!
//! Only a password check; no session or token is issued.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::LoginService;
