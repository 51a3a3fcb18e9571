use async_trait::async_trait;
use tracing::info;

use crate::{
    topic::application::ports::{
        incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
        outgoing::{CreateTopicData, TopicQueryResult, TopicRepository, TopicRepositoryError},
    },
    user::application::helpers::{ResolveUserIdError, UserIdentityResolver},
};

#[derive(Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
    users: UserIdentityResolver,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R, users: UserIdentityResolver) -> Self {
        Self { repository, users }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateTopicCommand,
    ) -> Result<TopicQueryResult, CreateTopicError> {
        let creator = self
            .users
            .by_username(command.username())
            .await
            .map_err(|e| match e {
                ResolveUserIdError::NotFound => CreateTopicError::CreatorNotFound,
                ResolveUserIdError::RepositoryError(msg) => CreateTopicError::RepositoryError(msg),
            })?;

        let topic = self
            .repository
            .create_topic(CreateTopicData {
                title: command.title().to_string(),
                creator,
            })
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicAlreadyExists => CreateTopicError::TopicAlreadyExists,
                TopicRepositoryError::CreatorNotFound => CreateTopicError::CreatorNotFound,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })?;

        info!(topic_id = %topic.id, creator_id = %creator, title = %topic.title, "Topic created");
        Ok(topic)
    }
}
