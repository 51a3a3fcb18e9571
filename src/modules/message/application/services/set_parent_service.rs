use async_trait::async_trait;
use tracing::info;

use crate::message::application::{
    domain::entities::MessageId,
    ports::{
        incoming::use_cases::{SetParentError, SetParentUseCase},
        outgoing::{MessageQuery, MessageQueryResult, MessageRepository, MessageRepositoryError},
    },
};

#[derive(Clone)]
pub struct SetParentService<Q, R>
where
    Q: MessageQuery + Send + Sync,
    R: MessageRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> SetParentService<Q, R>
where
    Q: MessageQuery + Send + Sync,
    R: MessageRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn load(&self, id: MessageId) -> Result<Option<MessageQueryResult>, SetParentError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| SetParentError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> SetParentUseCase for SetParentService<Q, R>
where
    Q: MessageQuery + Send + Sync,
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, parent: MessageId, child: MessageId) -> Result<(), SetParentError> {
        let parent_msg = self
            .load(parent)
            .await?
            .ok_or(SetParentError::ParentNotFound(parent))?;
        let child_msg = self
            .load(child)
            .await?
            .ok_or(SetParentError::ChildNotFound(child))?;

        if parent_msg.topic_id != child_msg.topic_id {
            return Err(SetParentError::CrossTopicMismatch);
        }

        // The cycle check runs inside the store's write, against the chain as
        // it stands once competing links in the topic have committed.
        self.repository
            .set_parent(child, parent)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::MessageNotFound => SetParentError::ChildNotFound(child),
                MessageRepositoryError::ParentNotFound => SetParentError::ParentNotFound(parent),
                MessageRepositoryError::CycleDetected => SetParentError::CycleDetected,
                other => SetParentError::RepositoryError(other.to_string()),
            })?;

        info!(%parent, %child, "Message parent set");
        Ok(())
    }
}
