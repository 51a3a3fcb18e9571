use std::sync::Arc;

use actix_web::web;

use crate::message::application::message_use_cases::MessageUseCases;
use crate::tests::support::in_memory::InMemoryForum;
use crate::tests::support::stubs::{FixedResetCodeGenerator, PlainHasher};
use crate::topic::application::helpers::TopicIdentityResolver;
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::user::application::helpers::UserIdentityResolver;
use crate::user::application::ports::outgoing::PasswordHasher;
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;

/// Code handed out by every reset request made through the builder's state.
pub const FIXED_RESET_CODE: u32 = 123_456;

/// Real services over one [`InMemoryForum`], with the slow or random
/// collaborators swapped for deterministic ones.
pub struct TestAppStateBuilder {
    store: InMemoryForum,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::with_store(InMemoryForum::new())
    }
}

impl TestAppStateBuilder {
    pub fn with_store(store: InMemoryForum) -> Self {
        Self {
            store,
            hasher: Arc::new(PlainHasher),
        }
    }

    pub fn with_hasher(mut self, hasher: impl PasswordHasher + Send + Sync + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;
        let users = UserIdentityResolver::new(Arc::new(store.clone()));
        let topics = TopicIdentityResolver::new(Arc::new(store.clone()));

        web::Data::new(AppState {
            user: UserUseCases::new(
                store.clone(),
                store.clone(),
                self.hasher,
                Arc::new(FixedResetCodeGenerator::new(FIXED_RESET_CODE)),
            ),
            topic: TopicUseCases::new(store.clone(), store.clone(), users.clone()),
            message: MessageUseCases::new(store.clone(), store, users, topics),
        })
    }
}
