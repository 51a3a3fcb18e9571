use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicQueryResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicByTitleError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicByTitleUseCase: Send + Sync {
    async fn execute(&self, title: &str) -> Result<TopicQueryResult, GetTopicByTitleError>;
}
