use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::user::application::ports::{
    incoming::use_cases::{ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase},
    outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ResetPasswordUseCase for ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        // The code alone identifies the user
        let user = self
            .query
            .find_by_reset_code(command.code().as_str())
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidCode)?;

        let new_hash = self
            .password_hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .complete_password_reset(user.id, command.code().as_str().to_string(), new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound | UserRepositoryError::StaleResetCode => {
                    ResetPasswordError::InvalidCode
                }
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }
}
