use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{topic::application::domain::entities::TopicId, user::application::domain::entities::UserId};

/// Read model of a topic row
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TopicQueryResult {
    #[schema(value_type = i64, example = 1)]
    pub id: TopicId,
    #[schema(example = "Ownership questions")]
    pub title: String,
    /// Number of messages posted in the topic
    pub messages: i64,
    /// Net votes; may be negative
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
    /// `null` once the creator has been removed
    #[schema(value_type = Option<i64>)]
    pub creator_id: Option<UserId>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// All topics ordered by id.
    async fn list_topics(&self) -> Result<Vec<TopicQueryResult>, TopicQueryError>;

    async fn find_by_title(&self, title: &str)
        -> Result<Option<TopicQueryResult>, TopicQueryError>;

    async fn count_topics(&self) -> Result<u64, TopicQueryError>;
}
