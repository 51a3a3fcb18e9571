mod create_message;
mod get_messages_by_topic;
mod react_to_message;
mod set_parent;

pub use create_message::{create_message_handler, CreateMessageRequest};
pub use get_messages_by_topic::get_messages_by_topic_handler;
pub use react_to_message::{dislike_message_handler, like_message_handler};
pub use set_parent::{set_parent_handler, SetParentRequest};

// utoipa path structs, needed by the OpenApi derive
pub use create_message::__path_create_message_handler;
pub use get_messages_by_topic::__path_get_messages_by_topic_handler;
pub use react_to_message::__path_dislike_message_handler;
pub use react_to_message::__path_like_message_handler;
pub use set_parent::__path_set_parent_handler;
