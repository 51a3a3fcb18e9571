mod count_topics;
mod create_topic;
mod get_topic_by_title;
mod get_topics;
mod remove_topic;
mod vote_topic;

pub use count_topics::{count_topics_handler, TopicCountResponse};
pub use create_topic::{create_topic_handler, CreateTopicRequest};
pub use get_topic_by_title::get_topic_by_title_handler;
pub use get_topics::get_topics_handler;
pub use remove_topic::remove_topic_handler;
pub use vote_topic::{downvote_topic_handler, upvote_topic_handler};

// utoipa path structs, needed by the OpenApi derive
pub use count_topics::__path_count_topics_handler;
pub use create_topic::__path_create_topic_handler;
pub use get_topic_by_title::__path_get_topic_by_title_handler;
pub use get_topics::__path_get_topics_handler;
pub use remove_topic::__path_remove_topic_handler;
pub use vote_topic::__path_downvote_topic_handler;
pub use vote_topic::__path_upvote_topic_handler;
