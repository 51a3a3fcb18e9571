use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyCredentialsError {
    #[error("Query error: {0}")]
    QueryFailed(String),

    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

/// Unknown usernames and wrong passwords both yield `Ok(false)`.
#[async_trait]
pub trait VerifyCredentialsUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str)
        -> Result<bool, VerifyCredentialsError>;
}
