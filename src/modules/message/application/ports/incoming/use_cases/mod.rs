mod create_message_use_case;
mod get_messages_by_topic_use_case;
mod react_to_message_use_case;
mod set_parent_use_case;

pub use create_message_use_case::{
    CreateMessageCommand, CreateMessageCommandError, CreateMessageError, CreateMessageUseCase,
};
pub use get_messages_by_topic_use_case::{GetMessagesByTopicError, GetMessagesByTopicUseCase};
pub use react_to_message_use_case::{ReactToMessageError, ReactToMessageUseCase};
pub use set_parent_use_case::{SetParentError, SetParentUseCase};
