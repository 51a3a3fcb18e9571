use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::user::application::{domain::entities::UserId, ports::outgoing::UserQueryResult};

/// Listing projection of a user. Carries no credentials.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserView {
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub topics_opened: i64,
    pub messages_sent: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UserQueryResult> for UserView {
    fn from(user: UserQueryResult) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            topics_opened: user.topics_opened,
            messages_sent: user.messages_sent,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUsersError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserView>, GetUsersError>;
}
