use async_trait::async_trait;

use crate::user::application::domain::entities::ResetCode;

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueResetCodeError {
    #[error("No user with this email")]
    EmailNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IssueResetCodeUseCase: Send + Sync {
    /// Replaces any code the user already holds.
    async fn execute(&self, email: &str) -> Result<ResetCode, IssueResetCodeError>;
}
