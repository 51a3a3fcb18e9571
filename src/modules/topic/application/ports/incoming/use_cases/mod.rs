mod count_topics_use_case;
mod create_topic_use_case;
mod get_topic_by_title_use_case;
mod get_topics_use_case;
mod remove_topic_use_case;
mod vote_topic_use_case;

pub use count_topics_use_case::{CountTopicsError, CountTopicsUseCase};
pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use get_topic_by_title_use_case::{GetTopicByTitleError, GetTopicByTitleUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use remove_topic_use_case::{RemoveTopicError, RemoveTopicUseCase};
pub use vote_topic_use_case::{VoteTopicError, VoteTopicUseCase};
