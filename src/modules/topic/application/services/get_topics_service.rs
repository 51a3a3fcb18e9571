use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    outgoing::{TopicQuery, TopicQueryResult},
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TopicQueryResult>, GetTopicsError> {
        self.query
            .list_topics()
            .await
            .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}
