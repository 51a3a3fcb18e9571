use async_trait::async_trait;
use email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeEmailCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Clone)]
pub struct ChangeEmailCommand {
    username: String,
    new_email: String,
}

impl ChangeEmailCommand {
    pub fn new(username: String, new_email: String) -> Result<Self, ChangeEmailCommandError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(ChangeEmailCommandError::EmptyUsername);
        }

        let new_email = new_email.trim().to_string();
        if !EmailAddress::is_valid(&new_email) {
            return Err(ChangeEmailCommandError::InvalidEmail);
        }

        Ok(Self {
            username,
            new_email,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn new_email(&self) -> &str {
        &self.new_email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangeEmailError {
    /// Also returned when the address already belongs to the requesting user.
    #[error("Email already in use")]
    EmailInUse,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangeEmailUseCase: Send + Sync {
    async fn execute(&self, command: ChangeEmailCommand) -> Result<(), ChangeEmailError>;
}
