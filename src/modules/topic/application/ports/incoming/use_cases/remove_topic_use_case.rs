use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveTopicUseCase: Send + Sync {
    async fn execute(&self, title: &str) -> Result<(), RemoveTopicError>;
}
