use std::fmt;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::user::application::{
    domain::entities::Username, ports::outgoing::UserResult,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username must be 3 to 20 characters of letters, digits or underscore")]
    InvalidUsername,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

#[derive(Clone)]
pub struct RegisterUserCommand {
    username: Username,
    email: String,
    password: String,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = Username::parse(username.trim())
            .map_err(|_| RegisterUserCommandError::InvalidUsername)?;

        let email = email.trim().to_string();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        if password.is_empty() {
            return Err(RegisterUserCommandError::EmptyPassword);
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<UserResult, RegisterUserError>;
}
