mod message_query;
mod message_repository;

pub use message_query::{MessageQuery, MessageQueryError, MessageQueryResult};
pub use message_repository::{CreateMessageData, MessageRepository, MessageRepositoryError};
