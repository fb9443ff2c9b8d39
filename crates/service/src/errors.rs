use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failure, passed through untouched after rollback.
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("hashing error: {0}")]
    Hash(String),
}
