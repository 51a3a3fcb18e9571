use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicByTitleError, GetTopicByTitleUseCase},
    outgoing::{TopicQuery, TopicQueryResult},
};

#[derive(Debug, Clone)]
pub struct GetTopicByTitleService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicByTitleService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicByTitleUseCase for GetTopicByTitleService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, title: &str) -> Result<TopicQueryResult, GetTopicByTitleError> {
        self.query
            .find_by_title(title)
            .await
            .map_err(|e| GetTopicByTitleError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicByTitleError::TopicNotFound)
    }
}
