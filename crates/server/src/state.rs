use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{repo::SeaOrmCredentialRepository, LoginService};

/// Shared by every handler. The pool is cloned cheaply; each mutating call
/// opens its own transaction.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub login: LoginService<SeaOrmCredentialRepository>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmCredentialRepository { db: db.clone() };
        Self { db, login: LoginService::new(Arc::new(repo)) }
    }
}
