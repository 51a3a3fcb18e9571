mod create_message_service;
mod get_messages_by_topic_service;
mod react_to_message_service;
mod set_parent_service;

pub use create_message_service::CreateMessageService;
pub use get_messages_by_topic_service::GetMessagesByTopicService;
pub use react_to_message_service::ReactToMessageService;
pub use set_parent_service::SetParentService;
