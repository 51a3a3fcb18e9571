use std::sync::Arc;

use async_trait::async_trait;

use crate::user::application::ports::{
    incoming::use_cases::{VerifyCredentialsError, VerifyCredentialsUseCase},
    outgoing::{PasswordHasher, UserQuery},
};

#[derive(Clone)]
pub struct VerifyCredentialsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q> VerifyCredentialsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q> VerifyCredentialsUseCase for VerifyCredentialsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, username: &str, password: &str) -> Result<bool, VerifyCredentialsError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| VerifyCredentialsError::QueryFailed(e.to_string()))?;

        let Some(user) = user else {
            return Ok(false);
        };

        self.password_hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| VerifyCredentialsError::HashingFailed(e.to_string()))
    }
}
