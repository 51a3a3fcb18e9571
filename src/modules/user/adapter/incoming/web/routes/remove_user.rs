use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::RemoveUserError;
use crate::AppState;

/// Remove a user
///
/// Topics and messages the user authored are kept with their author cleared.
#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username to remove")),
    responses(
        (status = 204, description = "User removed"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/{username}")]
pub async fn remove_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.user.remove.execute(&username).await {
        Ok(()) => {
            info!(username = %username, "User removed");
            ApiResponse::no_content()
        }
        Err(RemoveUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ RemoveUserError::RepositoryError(_)) => {
            error!(username = %username, error = %e, "User removal failed");
            ApiResponse::internal_error()
        }
    }
}
