use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::auth::errors::AuthError;
use service::resource::{Labels, Operation};
use service::ServiceError;
use thiserror::Error;
use tracing::error;

pub const LOGIN_FAILED: &str = "Erro ao realizar login.";

/// HTTP error: status plus the `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a resource failure. Storage and hashing failures are logged in full
    /// and reach the client as a generic message.
    pub fn from_service(err: ServiceError, labels: Labels, op: Operation) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            other => {
                error!(resource = labels.noun, operation = ?op, error = %other, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, labels.failure(op))
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            AuthError::NotFound => Self::new(StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AuthError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, "Senha incorreta."),
            other => {
                error!(code = other.code(), error = %other, "login failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, LOGIN_FAILED)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    const CUSTOMER: Labels = Labels { noun: "Cliente", plural: "clientes", feminine: false };

    #[test]
    fn client_errors_keep_their_message() {
        let e = ApiError::from_service(ServiceError::Validation("Status inválido.".into()), CUSTOMER, Operation::Create);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Status inválido.");
        let e = ApiError::from_service(ServiceError::NotFound("Cliente não encontrado.".into()), CUSTOMER, Operation::Delete);
        assert_eq!(e.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_errors_are_hidden() {
        let err = ServiceError::Db(DbErr::Custom("UNIQUE constraint failed: customer.national_id".into()));
        let e = ApiError::from_service(err, CUSTOMER, Operation::Update);
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Erro ao atualizar cliente no banco de dados.");
    }

    #[test]
    fn auth_errors_map_to_status() {
        assert_eq!(ApiError::from(AuthError::NotFound).status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(AuthError::Unauthorized).status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::Validation("x".into())).status, StatusCode::BAD_REQUEST);
        let e = ApiError::from(AuthError::Repository("pool timed out".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, LOGIN_FAILED);
    }
}
