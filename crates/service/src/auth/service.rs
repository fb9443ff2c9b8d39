use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{AuthUser, LoginInput};
use super::errors::AuthError;
use super::password::verify_password;
use super::repository::CredentialRepository;

pub const MISSING_CREDENTIALS: &str = "Email e senha são obrigatórios.";

/// Password check against the stored Argon2 hash, independent of web framework
pub struct LoginService<R: CredentialRepository> {
    repo: Arc<R>,
}

impl<R: CredentialRepository> Clone for LoginService<R> {
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone() }
    }
}

impl<R: CredentialRepository> LoginService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Authenticate a user by email and password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{LoginService, domain::LoginInput, password::hash_password};
    /// use service::auth::repository::mock::MockCredentialRepository;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockCredentialRepository::default());
    /// repo.insert_user("u@e.com", "N", "Comum", hash_password("Passw0rd").unwrap());
    /// let svc = LoginService::new(repo);
    /// let input = LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() };
    /// let user = tokio_test::block_on(svc.login(input)).unwrap();
    /// assert_eq!(user.name, "N");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(MISSING_CREDENTIALS.into()));
        }

        let user = self.repo
            .find_user_by_email(&input.email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let cred = self.repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let verified = verify_password(&input.password, &cred.password_hash)
            .map_err(|e| AuthError::HashError(e.to_string()))?;
        if !verified {
            return Err(AuthError::Unauthorized);
        }

        info!(user_id = user.id, "login_succeeded");
        Ok(user)
    }
}
