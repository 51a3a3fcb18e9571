use async_trait::async_trait;
use tracing::info;

use crate::user::application::ports::{
    incoming::use_cases::{ChangeUsernameCommand, ChangeUsernameError, ChangeUsernameUseCase},
    outgoing::{UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ChangeUsernameService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ChangeUsernameService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> ChangeUsernameUseCase for ChangeUsernameService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ChangeUsernameCommand) -> Result<(), ChangeUsernameError> {
        let new_username = command.new_username().as_str();

        let taken = self
            .query
            .find_by_username(new_username)
            .await
            .map_err(|e| ChangeUsernameError::RepositoryError(e.to_string()))?;
        if taken.is_some() {
            return Err(ChangeUsernameError::UsernameInUse);
        }

        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| ChangeUsernameError::RepositoryError(e.to_string()))?
            .ok_or(ChangeUsernameError::UserNotFound)?;

        self.repository
            .update_username(user.id, new_username.to_string())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => ChangeUsernameError::UsernameInUse,
                UserRepositoryError::UserNotFound => ChangeUsernameError::UserNotFound,
                other => ChangeUsernameError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, new_username, "Username changed");
        Ok(())
    }
}
