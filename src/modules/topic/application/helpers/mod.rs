mod topic_identity_resolver;

pub use topic_identity_resolver::{ResolveTopicIdError, TopicIdentityResolver};
