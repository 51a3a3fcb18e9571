use async_trait::async_trait;

use crate::message::application::ports::outgoing::MessageQueryResult;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateMessageCommandError {
    #[error("Topic title cannot be empty")]
    EmptyTopic,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Username cannot be empty")]
    EmptyUsername,
}

#[derive(Debug, Clone)]
pub struct CreateMessageCommand {
    topic_title: String,
    message: String,
    username: String,
}

impl CreateMessageCommand {
    /// The body is stored as given; only an all-whitespace body is rejected.
    pub fn new(
        topic_title: String,
        message: String,
        username: String,
    ) -> Result<Self, CreateMessageCommandError> {
        let topic_title = topic_title.trim().to_string();
        if topic_title.is_empty() {
            return Err(CreateMessageCommandError::EmptyTopic);
        }
        if message.trim().is_empty() {
            return Err(CreateMessageCommandError::EmptyMessage);
        }
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(CreateMessageCommandError::EmptyUsername);
        }

        Ok(Self {
            topic_title,
            message,
            username,
        })
    }

    pub fn topic_title(&self) -> &str {
        &self.topic_title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMessageError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateMessageCommand,
    ) -> Result<MessageQueryResult, CreateMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_body_verbatim() {
        let cmd =
            CreateMessageCommand::new(" T ".into(), "  hi\n".into(), "alice".into()).unwrap();
        assert_eq!(cmd.topic_title(), "T");
        assert_eq!(cmd.message(), "  hi\n");
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            CreateMessageCommand::new("".into(), "hi".into(), "alice".into()).unwrap_err(),
            CreateMessageCommandError::EmptyTopic
        );
        assert_eq!(
            CreateMessageCommand::new("T".into(), " \t".into(), "alice".into()).unwrap_err(),
            CreateMessageCommandError::EmptyMessage
        );
        assert_eq!(
            CreateMessageCommand::new("T".into(), "hi".into(), "".into()).unwrap_err(),
            CreateMessageCommandError::EmptyUsername
        );
    }
}
