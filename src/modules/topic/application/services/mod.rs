mod count_topics_service;
mod create_topic_service;
mod get_topic_by_title_service;
mod get_topics_service;
mod remove_topic_service;
mod vote_topic_service;

pub use count_topics_service::CountTopicsService;
pub use create_topic_service::CreateTopicService;
pub use get_topic_by_title_service::GetTopicByTitleService;
pub use get_topics_service::GetTopicsService;
pub use remove_topic_service::RemoveTopicService;
pub use vote_topic_service::VoteTopicService;
