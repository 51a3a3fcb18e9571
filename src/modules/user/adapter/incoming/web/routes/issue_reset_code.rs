use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::IssueResetCodeError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueResetCodeRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResetCodeResponse {
    #[schema(example = "482913")]
    pub reset_code: String,
}

/// Issue a password reset code
///
/// The code is returned directly; delivering it to the user is the caller's job.
#[utoipa::path(
    post,
    path = "/api/users/password-reset",
    tag = "users",
    request_body = IssueResetCodeRequest,
    responses(
        (
            status = 200,
            description = "Code issued, replacing any previous one",
            body = inline(SuccessResponse<ResetCodeResponse>),
            example = json!({ "success": true, "data": { "reset_code": "482913" } })
        ),
        (status = 404, description = "No user with this email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/password-reset")]
pub async fn issue_reset_code_handler(
    req: web::Json<IssueResetCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.issue_reset_code.execute(req.email.trim()).await {
        Ok(code) => {
            info!(email = %req.email, "Password reset code issued");
            ApiResponse::success(ResetCodeResponse {
                reset_code: code.as_str().to_string(),
            })
        }
        Err(IssueResetCodeError::EmailNotFound) => {
            warn!(email = %req.email, "Reset code requested for unknown email");
            ApiResponse::not_found("EMAIL_NOT_FOUND", "No user with this email")
        }
        Err(e @ IssueResetCodeError::RepositoryError(_)) => {
            error!(email = %req.email, error = %e, "Issuing reset code failed");
            ApiResponse::internal_error()
        }
    }
}
