use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::VoteDirection,
    ports::{
        incoming::use_cases::{VoteTopicError, VoteTopicUseCase},
        outgoing::{TopicRepository, TopicRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct VoteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> VoteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> VoteTopicUseCase for VoteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, title: &str, direction: VoteDirection) -> Result<(), VoteTopicError> {
        self.repository
            .vote(title, direction)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => VoteTopicError::TopicNotFound,
                other => VoteTopicError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::support::in_memory::InMemoryForum;

    #[tokio::test]
    async fn upvote_then_downvote_restores_count() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        store.seed_topic("T", alice);
        let service = VoteTopicService::new(store.clone());

        service.execute("T", VoteDirection::Up).await.unwrap();
        assert_eq!(store.topic("T").unwrap().upvotes, 1);

        service.execute("T", VoteDirection::Down).await.unwrap();
        assert_eq!(store.topic("T").unwrap().upvotes, 0);
    }

    #[tokio::test]
    async fn votes_are_unbounded_and_may_go_negative() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        store.seed_topic("T", alice);
        let service = VoteTopicService::new(store.clone());

        for _ in 0..3 {
            service.execute("T", VoteDirection::Down).await.unwrap();
        }

        assert_eq!(store.topic("T").unwrap().upvotes, -3);
    }

    #[tokio::test]
    async fn voting_on_missing_title_is_not_found() {
        let result = VoteTopicService::new(InMemoryForum::new())
            .execute("Nope", VoteDirection::Up)
            .await;

        assert!(matches!(result, Err(VoteTopicError::TopicNotFound)));
    }
}
