use async_trait::async_trait;

use crate::message::application::{
    domain::entities::{MessageId, Reaction},
    ports::{
        incoming::use_cases::{ReactToMessageError, ReactToMessageUseCase},
        outgoing::{MessageRepository, MessageRepositoryError},
    },
};

#[derive(Clone)]
pub struct ReactToMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> ReactToMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReactToMessageUseCase for ReactToMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: MessageId, reaction: Reaction) -> Result<(), ReactToMessageError> {
        self.repository
            .react(id, reaction)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::MessageNotFound => ReactToMessageError::MessageNotFound,
                other => ReactToMessageError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryForum;

    #[tokio::test]
    async fn like_then_dislike_returns_to_zero() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        let topic = store.seed_topic("Rust", alice);
        let id = store.seed_message(topic, alice, "hi");
        let service = ReactToMessageService::new(store.clone());

        service.execute(id, Reaction::Like).await.unwrap();
        assert_eq!(store.message(id).unwrap().likes, 1);

        service.execute(id, Reaction::Dislike).await.unwrap();
        assert_eq!(store.message(id).unwrap().likes, 0);
    }

    #[tokio::test]
    async fn dislikes_have_no_floor() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        let topic = store.seed_topic("Rust", alice);
        let id = store.seed_message(topic, alice, "hi");
        let service = ReactToMessageService::new(store.clone());

        service.execute(id, Reaction::Dislike).await.unwrap();
        service.execute(id, Reaction::Dislike).await.unwrap();

        assert_eq!(store.message(id).unwrap().likes, -2);
    }

    #[tokio::test]
    async fn missing_message_is_not_found() {
        let result = ReactToMessageService::new(InMemoryForum::new())
            .execute(MessageId::from(7), Reaction::Like)
            .await;

        assert!(matches!(result, Err(ReactToMessageError::MessageNotFound)));
    }
}
