use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::UserView;
use crate::AppState;

/// List every user
///
/// Credentials and reset codes are never part of the listing.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in creation order", body = [UserView]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user.get_list.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
