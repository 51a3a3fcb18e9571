use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyCredentialsRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyCredentialsResponse {
    pub valid: bool,
}

/// Check a username/password pair
///
/// An unknown username is reported as `valid: false`, never as 404.
#[utoipa::path(
    post,
    path = "/api/users/verify",
    tag = "users",
    request_body = VerifyCredentialsRequest,
    responses(
        (
            status = 200,
            description = "Verification outcome",
            body = inline(SuccessResponse<VerifyCredentialsResponse>),
            example = json!({ "success": true, "data": { "valid": true } })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/verify")]
pub async fn verify_credentials_handler(
    req: web::Json<VerifyCredentialsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .user
        .verify_credentials
        .execute(&req.username, &req.password)
        .await
    {
        Ok(valid) => ApiResponse::success(VerifyCredentialsResponse { valid }),
        Err(e) => {
            error!(username = %req.username, error = %e, "Credential check failed");
            ApiResponse::internal_error()
        }
    }
}
