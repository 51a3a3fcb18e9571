use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::user::application::ports::{
    incoming::use_cases::{ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase},
    outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
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
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ChangePasswordCommand) -> Result<(), ChangePasswordError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(command.current_password(), &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(ChangePasswordError::WrongPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::support::{in_memory::InMemoryForum, stubs::PlainHasher};
    use crate::user::application::{
        ports::incoming::use_cases::VerifyCredentialsUseCase,
        services::VerifyCredentialsService,
    };

    fn service(store: &InMemoryForum) -> ChangePasswordService<InMemoryForum, InMemoryForum> {
        ChangePasswordService::new(store.clone(), store.clone(), Arc::new(PlainHasher))
    }

    fn command(username: &str, current: &str, new: &str) -> ChangePasswordCommand {
        ChangePasswordCommand::new(username.into(), current.into(), new.into()).unwrap()
    }

    #[tokio::test]
    async fn old_password_stops_verifying_and_new_one_starts() {
        // Arrange
        let store = InMemoryForum::new();
        store.seed_user_with_password("alice", "a@x.com", "old");
        let verify = VerifyCredentialsService::new(store.clone(), Arc::new(PlainHasher));

        // Act
        service(&store)
            .execute(command("alice", "old", "new"))
            .await
            .unwrap();

        // Assert
        assert!(!verify.execute("alice", "old").await.unwrap());
        assert!(verify.execute("alice", "new").await.unwrap());
    }

    #[tokio::test]
    async fn wrong_current_password_leaves_hash_untouched() {
        let store = InMemoryForum::new();
        store.seed_user_with_password("alice", "a@x.com", "old");

        let result = service(&store)
            .execute(command("alice", "guess", "new"))
            .await;

        assert!(matches!(result, Err(ChangePasswordError::WrongPassword)));
        assert_eq!(
            store.user("alice").unwrap().password_hash,
            PlainHasher::hash_of("old")
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = InMemoryForum::new();

        let result = service(&store).execute(command("ghost", "a", "b")).await;

        assert!(matches!(result, Err(ChangePasswordError::UserNotFound)));
    }
}
