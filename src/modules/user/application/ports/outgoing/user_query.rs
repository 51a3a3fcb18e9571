use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::user::application::domain::entities::UserId;

/// Full persisted user row, including credentials.
/// Never serialised; services project it before it leaves the application layer.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub reset_code: Option<String>,
    pub topics_opened: i64,
    pub messages_sent: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<UserQueryResult>, UserQueryError>;

    /// First user (lowest id) holding this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// First user (lowest id) holding this reset code.
    async fn find_by_reset_code(
        &self,
        code: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// All users ordered by id.
    async fn list_users(&self) -> Result<Vec<UserQueryResult>, UserQueryError>;
}
