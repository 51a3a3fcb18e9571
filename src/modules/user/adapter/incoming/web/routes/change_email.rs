use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    ChangeEmailCommand, ChangeEmailCommandError, ChangeEmailError,
};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeEmailRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@new.example.com")]
    pub new_email: String,
}

fn map_change_email_error(err: ChangeEmailError, req: &ChangeEmailRequest) -> HttpResponse {
    match &err {
        ChangeEmailError::EmailInUse => {
            warn!(username = %req.username, email = %req.new_email, "Email already in use");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already in use")
        }
        ChangeEmailError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        ChangeEmailError::RepositoryError(_) => {
            error!(username = %req.username, error = %err, "Email change failed");
            ApiResponse::internal_error()
        }
    }
}

/// Change a user's email address
///
/// Fails when any user, including the caller, already holds the address.
#[utoipa::path(
    put,
    path = "/api/users/email",
    tag = "users",
    request_body = ChangeEmailRequest,
    responses(
        (status = 200, description = "Email changed", body = OkResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/email")]
pub async fn change_email_handler(
    req: web::Json<ChangeEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ChangeEmailCommand::new(req.username.clone(), req.new_email.clone()) {
        Ok(cmd) => cmd,
        Err(e @ ChangeEmailCommandError::EmptyUsername) => {
            return ApiResponse::bad_request("INVALID_USERNAME", &e.to_string())
        }
        Err(e @ ChangeEmailCommandError::InvalidEmail) => {
            return ApiResponse::bad_request("INVALID_EMAIL", &e.to_string())
        }
    };

    match data.user.change_email.execute(command).await {
        Ok(()) => {
            info!(username = %req.username, "Email changed");
            ApiResponse::ok()
        }
        Err(e) => map_change_email_error(e, &req),
    }
}
