use async_trait::async_trait;

use crate::{
    message::application::ports::outgoing::MessageQueryResult,
    topic::application::domain::entities::TopicId,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessagesByTopicError {
    #[error("Failed to fetch messages: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMessagesByTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: TopicId,
    ) -> Result<Vec<MessageQueryResult>, GetMessagesByTopicError>;
}
