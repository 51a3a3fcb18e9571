use async_trait::async_trait;
use tracing::info;

use crate::topic::application::ports::{
    incoming::use_cases::{RemoveTopicError, RemoveTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct RemoveTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveTopicUseCase for RemoveTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, title: &str) -> Result<(), RemoveTopicError> {
        self.repository
            .delete_topic(title)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => RemoveTopicError::TopicNotFound,
                other => RemoveTopicError::RepositoryError(other.to_string()),
            })?;

        info!(title, "Topic removed");
        Ok(())
    }
}
