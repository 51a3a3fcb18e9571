use async_trait::async_trait;
use tracing::info;

use crate::{
    message::application::ports::{
        incoming::use_cases::{CreateMessageCommand, CreateMessageError, CreateMessageUseCase},
        outgoing::{CreateMessageData, MessageQueryResult, MessageRepository, MessageRepositoryError},
    },
    topic::application::helpers::{ResolveTopicIdError, TopicIdentityResolver},
    user::application::helpers::{ResolveUserIdError, UserIdentityResolver},
};

#[derive(Clone)]
pub struct CreateMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
    users: UserIdentityResolver,
    topics: TopicIdentityResolver,
}

impl<R> CreateMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R, users: UserIdentityResolver, topics: TopicIdentityResolver) -> Self {
        Self {
            repository,
            users,
            topics,
        }
    }
}

#[async_trait]
impl<R> CreateMessageUseCase for CreateMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateMessageCommand,
    ) -> Result<MessageQueryResult, CreateMessageError> {
        let author = self
            .users
            .by_username(command.username())
            .await
            .map_err(|e| match e {
                ResolveUserIdError::NotFound => CreateMessageError::AuthorNotFound,
                ResolveUserIdError::RepositoryError(msg) => CreateMessageError::RepositoryError(msg),
            })?;

        let topic_id = self
            .topics
            .by_title(command.topic_title())
            .await
            .map_err(|e| match e {
                ResolveTopicIdError::NotFound => CreateMessageError::TopicNotFound,
                ResolveTopicIdError::RepositoryError(msg) => {
                    CreateMessageError::RepositoryError(msg)
                }
            })?;

        let message = self
            .repository
            .create_message(CreateMessageData {
                topic_id,
                author,
                message: command.message().to_string(),
            })
            .await
            .map_err(|e| match e {
                MessageRepositoryError::AuthorNotFound => CreateMessageError::AuthorNotFound,
                MessageRepositoryError::TopicNotFound => CreateMessageError::TopicNotFound,
                other => CreateMessageError::RepositoryError(other.to_string()),
            })?;

        info!(message_id = %message.id, topic_id = %topic_id, author_id = %author, "Message posted");
        Ok(message)
    }
}
