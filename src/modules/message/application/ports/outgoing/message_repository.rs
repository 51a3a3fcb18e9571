use async_trait::async_trait;

use crate::{
    message::application::{
        domain::entities::{MessageId, Reaction},
        ports::outgoing::MessageQueryResult,
    },
    topic::application::domain::entities::TopicId,
    user::application::domain::entities::UserId,
};

#[derive(Debug, Clone)]
pub struct CreateMessageData {
    pub topic_id: TopicId,
    pub author: UserId,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Message not found")]
    MessageNotFound,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Parent message not found")]
    ParentNotFound,

    #[error("Linking would make a message its own ancestor")]
    CycleDetected,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts the message and bumps the author's `messages_sent` and the
    /// topic's `messages` in one transaction.
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageQueryResult, MessageRepositoryError>;

    /// Links `child` under `parent`. The parent's chain is checked for the
    /// child and the link written in one transaction, serialized per topic.
    async fn set_parent(
        &self,
        child: MessageId,
        parent: MessageId,
    ) -> Result<(), MessageRepositoryError>;

    async fn react(&self, id: MessageId, reaction: Reaction)
        -> Result<(), MessageRepositoryError>;
}
