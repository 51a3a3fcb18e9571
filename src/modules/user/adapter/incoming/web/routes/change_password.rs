use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordCommandError, ChangePasswordError,
};
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[schema(example = "alice")]
    pub username: String,
    pub current_password: String,
    pub new_password: String,
}

fn map_change_password_error(err: ChangePasswordError, username: &str) -> HttpResponse {
    match &err {
        ChangePasswordError::UserNotFound => {
            warn!(username, "Password change for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        ChangePasswordError::WrongPassword => {
            warn!(username, "Password change with wrong current password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Current password is incorrect")
        }
        ChangePasswordError::HashingFailed(_) | ChangePasswordError::RepositoryError(_) => {
            error!(username, error = %err, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}

/// Change a password, given the current one
#[utoipa::path(
    put,
    path = "/api/users/password",
    tag = "users",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = OkResponse),
        (status = 400, description = "Missing username or new password", body = ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/password")]
pub async fn change_password_handler(
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command =
        match ChangePasswordCommand::new(req.username, req.current_password, req.new_password) {
            Ok(cmd) => cmd,
            Err(e @ ChangePasswordCommandError::EmptyUsername) => {
                return ApiResponse::bad_request("INVALID_USERNAME", &e.to_string())
            }
            Err(e @ ChangePasswordCommandError::EmptyNewPassword) => {
                return ApiResponse::bad_request("INVALID_PASSWORD", &e.to_string())
            }
        };

    let username = command.username().to_string();
    match data.user.change_password.execute(command).await {
        Ok(()) => {
            info!(username = %username, "Password changed");
            ApiResponse::ok()
        }
        Err(e) => map_change_password_error(e, &username),
    }
}
