use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    ChangeUsernameCommand, ChangeUsernameCommandError, ChangeUsernameError,
};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeUsernameRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice_2")]
    pub new_username: String,
}

fn map_change_username_error(err: ChangeUsernameError, req: &ChangeUsernameRequest) -> HttpResponse {
    match &err {
        ChangeUsernameError::UsernameInUse => {
            warn!(username = %req.username, new_username = %req.new_username, "Username already in use");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already in use")
        }
        ChangeUsernameError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        ChangeUsernameError::RepositoryError(_) => {
            error!(username = %req.username, error = %err, "Username change failed");
            ApiResponse::internal_error()
        }
    }
}

/// Rename a user
#[utoipa::path(
    put,
    path = "/api/users/username",
    tag = "users",
    request_body = ChangeUsernameRequest,
    responses(
        (status = 200, description = "Username changed", body = OkResponse),
        (status = 400, description = "Invalid username format", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/username")]
pub async fn change_username_handler(
    req: web::Json<ChangeUsernameRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ChangeUsernameCommand::new(req.username.clone(), req.new_username.clone())
    {
        Ok(cmd) => cmd,
        Err(e @ ChangeUsernameCommandError::EmptyUsername)
        | Err(e @ ChangeUsernameCommandError::InvalidFormat) => {
            return ApiResponse::bad_request("INVALID_USERNAME", &e.to_string())
        }
    };

    match data.user.change_username.execute(command).await {
        Ok(()) => {
            info!(from = %req.username, to = %req.new_username, "Username changed");
            ApiResponse::ok()
        }
        Err(e) => map_change_username_error(e, &req),
    }
}
