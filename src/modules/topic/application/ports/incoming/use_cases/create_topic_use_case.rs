use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicQueryResult;

pub const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 255 characters")]
    TitleTooLong,

    #[error("Username cannot be empty")]
    EmptyUsername,
}

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    title: String,
    username: String,
}

impl CreateTopicCommand {
    pub fn new(title: String, username: String) -> Result<Self, CreateTopicCommandError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CreateTopicCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(CreateTopicCommandError::TitleTooLong);
        }

        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(CreateTopicCommandError::EmptyUsername);
        }

        Ok(Self { title, username })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Creator not found")]
    CreatorNotFound,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand)
        -> Result<TopicQueryResult, CreateTopicError>;
}
