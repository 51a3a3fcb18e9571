use async_trait::async_trait;

use crate::user::application::ports::{
    incoming::use_cases::{ChangeEmailCommand, ChangeEmailError, ChangeEmailUseCase},
    outgoing::{UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ChangeEmailService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ChangeEmailService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> ChangeEmailUseCase for ChangeEmailService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ChangeEmailCommand) -> Result<(), ChangeEmailError> {
        // Any holder counts, including the requesting user
        let holder = self
            .query
            .find_by_email(command.new_email())
            .await
            .map_err(|e| ChangeEmailError::RepositoryError(e.to_string()))?;
        if holder.is_some() {
            return Err(ChangeEmailError::EmailInUse);
        }

        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| ChangeEmailError::RepositoryError(e.to_string()))?
            .ok_or(ChangeEmailError::UserNotFound)?;

        self.repository
            .update_email(user.id, command.new_email().to_string())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangeEmailError::UserNotFound,
                other => ChangeEmailError::RepositoryError(other.to_string()),
            })
    }
}
