use async_trait::async_trait;

use crate::{
    topic::application::{domain::entities::VoteDirection, ports::outgoing::TopicQueryResult},
    user::application::domain::entities::UserId,
};

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub title: String,
    pub creator: UserId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Creator not found")]
    CreatorNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Inserts the topic and bumps the creator's `topics_opened` in one transaction.
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicQueryResult, TopicRepositoryError>;

    /// Messages of the topic go with it.
    async fn delete_topic(&self, title: &str) -> Result<(), TopicRepositoryError>;

    async fn vote(&self, title: &str, direction: VoteDirection)
        -> Result<(), TopicRepositoryError>;
}
