use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveUserUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<(), RemoveUserError>;
}
