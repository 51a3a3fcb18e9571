use async_trait::async_trait;

use crate::message::application::domain::entities::MessageId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetParentError {
    #[error("Parent message with ID {0} not found")]
    ParentNotFound(MessageId),

    #[error("Child message with ID {0} not found")]
    ChildNotFound(MessageId),

    #[error("Messages are not in the same topic")]
    CrossTopicMismatch,

    #[error("Linking would make a message its own ancestor")]
    CycleDetected,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetParentUseCase: Send + Sync {
    async fn execute(&self, parent: MessageId, child: MessageId) -> Result<(), SetParentError>;
}
