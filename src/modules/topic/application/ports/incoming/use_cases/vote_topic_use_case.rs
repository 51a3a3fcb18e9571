use async_trait::async_trait;

use crate::topic::application::domain::entities::VoteDirection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VoteTopicUseCase: Send + Sync {
    async fn execute(&self, title: &str, direction: VoteDirection) -> Result<(), VoteTopicError>;
}
