use std::sync::Arc;

use crate::topic::application::{
    ports::{
        incoming::use_cases::{
            CountTopicsUseCase, CreateTopicUseCase, GetTopicByTitleUseCase, GetTopicsUseCase,
            RemoveTopicUseCase, VoteTopicUseCase,
        },
        outgoing::{TopicQuery, TopicRepository},
    },
    services::{
        CountTopicsService, CreateTopicService, GetTopicByTitleService, GetTopicsService,
        RemoveTopicService, VoteTopicService,
    },
};
use crate::user::application::helpers::UserIdentityResolver;

#[derive(Clone)]
pub struct TopicUseCases {
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_by_title: Arc<dyn GetTopicByTitleUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveTopicUseCase + Send + Sync>,
    pub vote: Arc<dyn VoteTopicUseCase + Send + Sync>,
    pub count: Arc<dyn CountTopicsUseCase + Send + Sync>,
}

impl TopicUseCases {
    pub fn new<Q, R>(query: Q, repository: R, users: UserIdentityResolver) -> Self
    where
        Q: TopicQuery + Clone + Send + Sync + 'static,
        R: TopicRepository + Clone + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(CreateTopicService::new(repository.clone(), users)),
            get_list: Arc::new(GetTopicsService::new(query.clone())),
            get_by_title: Arc::new(GetTopicByTitleService::new(query.clone())),
            remove: Arc::new(RemoveTopicService::new(repository.clone())),
            vote: Arc::new(VoteTopicService::new(repository)),
            count: Arc::new(CountTopicsService::new(query)),
        }
    }
}
