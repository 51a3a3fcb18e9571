use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    ResetPasswordCommand, ResetPasswordCommandError, ResetPasswordError,
};
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "482913")]
    pub code: String,
    pub new_password: String,
}

fn map_reset_password_error(err: ResetPasswordError, email: &str) -> HttpResponse {
    match &err {
        ResetPasswordError::InvalidCode => {
            warn!(email, "Password reset with unknown code");
            ApiResponse::unauthorized("INVALID_RESET_CODE", "Reset code is invalid")
        }
        ResetPasswordError::HashingFailed(_) | ResetPasswordError::RepositoryError(_) => {
            error!(email, error = %err, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}

/// Reset a password with a previously issued code
///
/// The code is single-use and cleared on success.
#[utoipa::path(
    put,
    path = "/api/users/password-reset",
    tag = "users",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password replaced", body = OkResponse),
        (status = 400, description = "Malformed code or empty password", body = ErrorResponse),
        (status = 401, description = "No user holds this code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/password-reset")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    let command = match ResetPasswordCommand::new(req.email, req.code, req.new_password) {
        Ok(cmd) => cmd,
        Err(e @ ResetPasswordCommandError::InvalidCode) => {
            return ApiResponse::bad_request("INVALID_RESET_CODE", &e.to_string())
        }
        Err(e @ ResetPasswordCommandError::EmptyNewPassword) => {
            return ApiResponse::bad_request("INVALID_PASSWORD", &e.to_string())
        }
    };

    match data.user.reset_password.execute(command).await {
        Ok(()) => {
            info!(email = %email, "Password reset completed");
            ApiResponse::ok()
        }
        Err(e) => map_reset_password_error(e, &email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryForum;
    use crate::tests::support::stubs::PlainHasher;
    use crate::user::application::domain::entities::UserId;
    use crate::user::application::ports::outgoing::UserRepository;

    async fn reset(store: InMemoryForum, code: &str, password: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store).build())
                .service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/password-reset")
            .set_json(json!({ "email": "a@x.com", "code": code, "new_password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    async fn store_with_code(code: &str) -> (InMemoryForum, UserId) {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        store.set_reset_code(alice, code.to_string()).await.unwrap();
        (store, alice)
    }

    #[actix_web::test]
    async fn test_reset_password_replaces_hash_and_clears_code() {
        let (store, _) = store_with_code("123456").await;

        let (status, _) = reset(store.clone(), "123456", "fresh").await;

        assert_eq!(status, StatusCode::OK);
        let alice = store.user("alice").unwrap();
        assert_eq!(alice.password_hash, PlainHasher::hash_of("fresh"));
        assert!(alice.reset_code.is_none());
    }

    #[actix_web::test]
    async fn test_reset_password_code_is_single_use() {
        let (store, _) = store_with_code("123456").await;

        reset(store.clone(), "123456", "fresh").await;
        let (status, body) = reset(store, "123456", "again").await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_RESET_CODE");
    }

    #[actix_web::test]
    async fn test_reset_password_malformed_code_bad_request() {
        let (store, _) = store_with_code("123456").await;

        let (status, _) = reset(store, "12ab", "fresh").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
