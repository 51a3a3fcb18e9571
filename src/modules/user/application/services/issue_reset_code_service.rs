use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::user::application::{
    domain::entities::ResetCode,
    ports::{
        incoming::use_cases::{IssueResetCodeError, IssueResetCodeUseCase},
        outgoing::{ResetCodeGenerator, UserQuery, UserRepository, UserRepositoryError},
    },
};

/// Draws allowed before giving up on finding a code no other user holds.
const MAX_CODE_DRAWS: usize = 5;

#[derive(Clone)]
pub struct IssueResetCodeService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    generator: Arc<dyn ResetCodeGenerator + Send + Sync>,
}

impl<Q, R> IssueResetCodeService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        generator: Arc<dyn ResetCodeGenerator + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            generator,
        }
    }
}

#[async_trait]
impl<Q, R> IssueResetCodeUseCase for IssueResetCodeService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<ResetCode, IssueResetCodeError> {
        let user = self
            .query
            .find_by_email(email.trim())
            .await
            .map_err(|e| IssueResetCodeError::RepositoryError(e.to_string()))?
            .ok_or(IssueResetCodeError::EmailNotFound)?;

        for _ in 0..MAX_CODE_DRAWS {
            let code = self.generator.generate();

            match self
                .repository
                .set_reset_code(user.id, code.as_str().to_string())
                .await
            {
                Ok(()) => {
                    info!(user_id = %user.id, "Password reset code issued");
                    return Ok(code);
                }
                Err(UserRepositoryError::ResetCodeTaken) => {
                    warn!(user_id = %user.id, "Reset code already held, drawing another");
                }
                Err(UserRepositoryError::UserNotFound) => {
                    return Err(IssueResetCodeError::EmailNotFound);
                }
                Err(other) => return Err(IssueResetCodeError::RepositoryError(other.to_string())),
            }
        }

        Err(IssueResetCodeError::RepositoryError(format!(
            "no free reset code after {MAX_CODE_DRAWS} draws"
        )))
    }
}
