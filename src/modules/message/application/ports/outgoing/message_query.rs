use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    message::application::domain::entities::MessageId,
    topic::application::domain::entities::TopicId,
    user::application::domain::entities::UserId,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MessageQueryResult {
    #[schema(value_type = i64, example = 1)]
    pub id: MessageId,
    #[schema(example = "hi")]
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    /// `null` once the author has been removed
    #[schema(value_type = Option<i64>)]
    pub user_id: Option<UserId>,
    #[schema(value_type = Option<i64>)]
    pub parent_id: Option<MessageId>,
    #[schema(value_type = i64)]
    pub topic_id: TopicId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    async fn find_by_id(&self, id: MessageId)
        -> Result<Option<MessageQueryResult>, MessageQueryError>;

    /// Messages of a topic in insertion (id) order.
    async fn list_by_topic(&self, topic_id: TopicId)
        -> Result<Vec<MessageQueryResult>, MessageQueryError>;
}
