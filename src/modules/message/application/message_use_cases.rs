use std::sync::Arc;

use crate::message::application::{
    ports::{
        incoming::use_cases::{
            CreateMessageUseCase, GetMessagesByTopicUseCase, ReactToMessageUseCase,
            SetParentUseCase,
        },
        outgoing::{MessageQuery, MessageRepository},
    },
    services::{
        CreateMessageService, GetMessagesByTopicService, ReactToMessageService, SetParentService,
    },
};
use crate::topic::application::helpers::TopicIdentityResolver;
use crate::user::application::helpers::UserIdentityResolver;

#[derive(Clone)]
pub struct MessageUseCases {
    pub create: Arc<dyn CreateMessageUseCase + Send + Sync>,
    pub get_by_topic: Arc<dyn GetMessagesByTopicUseCase + Send + Sync>,
    pub set_parent: Arc<dyn SetParentUseCase + Send + Sync>,
    pub react: Arc<dyn ReactToMessageUseCase + Send + Sync>,
}

impl MessageUseCases {
    pub fn new<Q, R>(
        query: Q,
        repository: R,
        users: UserIdentityResolver,
        topics: TopicIdentityResolver,
    ) -> Self
    where
        Q: MessageQuery + Clone + Send + Sync + 'static,
        R: MessageRepository + Clone + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(CreateMessageService::new(repository.clone(), users, topics)),
            get_by_topic: Arc::new(GetMessagesByTopicService::new(query.clone())),
            set_parent: Arc::new(SetParentService::new(query, repository.clone())),
            react: Arc::new(ReactToMessageService::new(repository)),
        }
    }
}
