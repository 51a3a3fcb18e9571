use async_trait::async_trait;

use crate::{
    message::application::ports::{
        incoming::use_cases::{GetMessagesByTopicError, GetMessagesByTopicUseCase},
        outgoing::{MessageQuery, MessageQueryResult},
    },
    topic::application::domain::entities::TopicId,
};

#[derive(Clone)]
pub struct GetMessagesByTopicService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMessagesByTopicService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMessagesByTopicUseCase for GetMessagesByTopicService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: TopicId,
    ) -> Result<Vec<MessageQueryResult>, GetMessagesByTopicError> {
        self.query
            .list_by_topic(topic_id)
            .await
            .map_err(|e| GetMessagesByTopicError::QueryFailed(e.to_string()))
    }
}
