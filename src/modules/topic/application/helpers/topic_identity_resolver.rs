use std::sync::Arc;

use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveTopicIdError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Title → id lookup used by the message module.
#[derive(Clone)]
pub struct TopicIdentityResolver {
    topic_query: Arc<dyn TopicQuery + Send + Sync>,
}

impl TopicIdentityResolver {
    pub fn new(topic_query: Arc<dyn TopicQuery + Send + Sync>) -> Self {
        Self { topic_query }
    }

    pub async fn by_title(&self, title: &str) -> Result<TopicId, ResolveTopicIdError> {
        match self.topic_query.find_by_title(title).await {
            Ok(Some(topic)) => Ok(topic.id),
            Ok(None) => Err(ResolveTopicIdError::NotFound),
            Err(TopicQueryError::DatabaseError(msg)) => {
                Err(ResolveTopicIdError::RepositoryError(msg))
            }
        }
    }
}
