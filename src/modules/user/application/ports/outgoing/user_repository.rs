use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Public part of a user after a write.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserResult {
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Reset code is held by another user")]
    ResetCodeTaken,

    #[error("Reset code no longer matches")]
    StaleResetCode,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_email(&self, user_id: UserId, email: String)
        -> Result<(), UserRepositoryError>;

    async fn update_username(
        &self,
        user_id: UserId,
        username: String,
    ) -> Result<(), UserRepositoryError>;

    /// Fails with `ResetCodeTaken` when another user already holds `code`.
    async fn set_reset_code(&self, user_id: UserId, code: String)
        -> Result<(), UserRepositoryError>;

    /// Stores the new hash and clears the reset code in one statement, only
    /// while the user still holds `code`. Otherwise `StaleResetCode`.
    async fn complete_password_reset(
        &self,
        user_id: UserId,
        code: String,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Detaches the user's topics and messages, then deletes the user, atomically.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
