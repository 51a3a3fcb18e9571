use std::fmt;

use async_trait::async_trait;

use crate::user::application::domain::entities::ResetCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordCommandError {
    #[error("Reset code is invalid")]
    InvalidCode,

    #[error("New password cannot be empty")]
    EmptyNewPassword,
}

#[derive(Clone)]
pub struct ResetPasswordCommand {
    email: String,
    code: ResetCode,
    new_password: String,
}

impl ResetPasswordCommand {
    pub fn new(
        email: String,
        code: String,
        new_password: String,
    ) -> Result<Self, ResetPasswordCommandError> {
        let code = ResetCode::parse(&code).map_err(|_| ResetPasswordCommandError::InvalidCode)?;
        if new_password.is_empty() {
            return Err(ResetPasswordCommandError::EmptyNewPassword);
        }

        Ok(Self {
            email: email.trim().to_string(),
            code,
            new_password,
        })
    }

    /// Informational only; the user is located by code.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &ResetCode {
        &self.code
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl fmt::Debug for ResetPasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordCommand")
            .field("email", &self.email)
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Reset code is invalid")]
    InvalidCode,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}
