use async_trait::async_trait;

use crate::message::application::domain::entities::{MessageId, Reaction};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReactToMessageError {
    #[error("Message not found")]
    MessageNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReactToMessageUseCase: Send + Sync {
    async fn execute(&self, id: MessageId, reaction: Reaction) -> Result<(), ReactToMessageError>;
}
