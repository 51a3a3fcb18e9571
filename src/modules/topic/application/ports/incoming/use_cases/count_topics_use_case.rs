use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CountTopicsError {
    #[error("Failed to count topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait CountTopicsUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, CountTopicsError>;
}
