use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::user::application::ports::outgoing::UserResult;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// 3 to 20 letters, digits or underscores
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    let code = match err {
        RegisterUserCommandError::InvalidUsername => "INVALID_USERNAME",
        RegisterUserCommandError::InvalidEmail => "INVALID_EMAIL",
        RegisterUserCommandError::EmptyPassword => "INVALID_PASSWORD",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_register_user_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::UsernameAlreadyExists => {
            warn!(username = %req.username, "Username already exists");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already exists")
        }

        RegisterUserError::EmailAlreadyExists => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already exists")
        }

        RegisterUserError::HashingFailed(_) | RegisterUserError::RepositoryError(_) => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "User registration failed"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<UserResult>),
            example = json!({
                "success": true,
                "data": { "id": 1, "username": "alice", "email": "alice@example.com" }
            })
        ),
        (status = 400, description = "Invalid username, email or password", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match RegisterUserCommand::new(
        req.username.clone(),
        req.email.clone(),
        req.password.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.user.register.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");
            ApiResponse::created(user)
        }
        Err(e) => map_register_user_error(e, &req),
    }
}
