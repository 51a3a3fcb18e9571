use std::fmt;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("New password cannot be empty")]
    EmptyNewPassword,
}

#[derive(Clone)]
pub struct ChangePasswordCommand {
    username: String,
    current_password: String,
    new_password: String,
}

impl ChangePasswordCommand {
    pub fn new(
        username: String,
        current_password: String,
        new_password: String,
    ) -> Result<Self, ChangePasswordCommandError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(ChangePasswordCommandError::EmptyUsername);
        }
        if new_password.is_empty() {
            return Err(ChangePasswordCommandError::EmptyNewPassword);
        }

        Ok(Self {
            username,
            current_password,
            new_password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl fmt::Debug for ChangePasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordCommand")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Current password is incorrect")]
    WrongPassword,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(&self, command: ChangePasswordCommand) -> Result<(), ChangePasswordError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_new_password_is_rejected() {
        let result = ChangePasswordCommand::new("alice".into(), "old".into(), String::new());
        assert_eq!(result.unwrap_err(), ChangePasswordCommandError::EmptyNewPassword);
    }

    #[test]
    fn blank_username_is_rejected() {
        let result = ChangePasswordCommand::new("   ".into(), "old".into(), "new".into());
        assert_eq!(result.unwrap_err(), ChangePasswordCommandError::EmptyUsername);
    }

    #[test]
    fn empty_current_password_is_allowed_through_to_verification() {
        let cmd = ChangePasswordCommand::new("alice".into(), String::new(), "new".into()).unwrap();
        assert_eq!(cmd.current_password(), "");
        assert_eq!(cmd.new_password(), "new");
    }
}
