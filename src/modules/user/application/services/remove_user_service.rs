use async_trait::async_trait;
use tracing::info;

use crate::user::application::ports::{
    incoming::use_cases::{RemoveUserError, RemoveUserUseCase},
    outgoing::{UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct RemoveUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> RemoveUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RemoveUserUseCase for RemoveUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<(), RemoveUserError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| RemoveUserError::RepositoryError(e.to_string()))?
            .ok_or(RemoveUserError::UserNotFound)?;

        self.repository
            .delete_user(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => RemoveUserError::UserNotFound,
                other => RemoveUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, username, "User removed");
        Ok(())
    }
}
