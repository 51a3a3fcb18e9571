use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::user::application::ports::{
    incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    outgoing::{
        CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
        UserResult,
    },
};

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
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
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError> {
        let username = command.username().as_str();

        // 1️⃣ Username taken?
        let existing = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::UsernameAlreadyExists);
        }

        // 2️⃣ Email taken? (not a store constraint)
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        // 3️⃣ Hash
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // 4️⃣ Persist; a concurrent registration may still win the username here
        let user = self
            .repository
            .create_user(CreateUserData {
                username: username.to_string(),
                email: command.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UsernameAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }
}
