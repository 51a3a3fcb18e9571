use async_trait::async_trait;

use crate::user::application::domain::entities::Username;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeUsernameCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be 3 to 20 characters of letters, digits or underscore")]
    InvalidFormat,
}

#[derive(Debug, Clone)]
pub struct ChangeUsernameCommand {
    username: String,
    new_username: Username,
}

impl ChangeUsernameCommand {
    /// The format of `new_username` is checked here, before any uniqueness lookup.
    pub fn new(username: String, new_username: String) -> Result<Self, ChangeUsernameCommandError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(ChangeUsernameCommandError::EmptyUsername);
        }

        let new_username = Username::parse(new_username.trim())
            .map_err(|_| ChangeUsernameCommandError::InvalidFormat)?;

        Ok(Self {
            username,
            new_username,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn new_username(&self) -> &Username {
        &self.new_username
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangeUsernameError {
    /// Also returned when renaming a user to its current name.
    #[error("Username already in use")]
    UsernameInUse,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangeUsernameUseCase: Send + Sync {
    async fn execute(&self, command: ChangeUsernameCommand) -> Result<(), ChangeUsernameError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_new_username_is_rejected() {
        let too_long = "x".repeat(21);
        for bad in ["ab", "with space", too_long.as_str()] {
            let result = ChangeUsernameCommand::new("alice".into(), bad.to_string());
            assert_eq!(
                result.unwrap_err(),
                ChangeUsernameCommandError::InvalidFormat,
                "{bad}"
            );
        }
    }

    #[test]
    fn current_username_is_not_format_checked() {
        let cmd = ChangeUsernameCommand::new("old name".into(), "new_name".into()).unwrap();
        assert_eq!(cmd.username(), "old name");
        assert_eq!(cmd.new_username().as_str(), "new_name");
    }
}
