use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{CountTopicsError, CountTopicsUseCase},
    outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct CountTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> CountTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CountTopicsUseCase for CountTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self) -> Result<u64, CountTopicsError> {
        self.query
            .count_topics()
            .await
            .map_err(|e| CountTopicsError::QueryFailed(e.to_string()))
    }
}
