use async_trait::async_trait;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Persistence seen by the login workflow.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCredentialRepository {
        users: Mutex<HashMap<String, AuthUser>>, // key: email
        creds: Mutex<HashMap<i32, Credentials>>, // key: user_id
    }

    impl MockCredentialRepository {
        /// Store a user with an already hashed password; ids are sequential.
        pub fn insert_user(&self, email: &str, name: &str, role: &str, password_hash: String) -> AuthUser {
            let mut users = self.users.lock().unwrap();
            let user = AuthUser {
                id: users.len() as i32 + 1,
                email: email.to_string(),
                name: name.to_string(),
                role: role.to_string(),
            };
            users.insert(email.to_string(), user.clone());
            self.creds
                .lock()
                .unwrap()
                .insert(user.id, Credentials { user_id: user.id, password_hash });
            user
        }
    }

    #[async_trait]
    impl CredentialRepository for MockCredentialRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).cloned())
        }

        async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
            let creds = self.creds.lock().unwrap();
            Ok(creds.get(&user_id).cloned())
        }
    }
}
