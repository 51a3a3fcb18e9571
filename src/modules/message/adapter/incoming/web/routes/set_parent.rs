use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::message::application::domain::entities::MessageId;
use crate::message::application::ports::incoming::use_cases::SetParentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetParentRequest {
    /// Message the path's message is threaded under
    #[schema(example = 1)]
    pub parent_id: i64,
}

fn map_set_parent_error(err: SetParentError) -> HttpResponse {
    match &err {
        SetParentError::ParentNotFound(_) => {
            ApiResponse::not_found("PARENT_NOT_FOUND", &err.to_string())
        }
        SetParentError::ChildNotFound(_) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", &err.to_string())
        }
        SetParentError::CrossTopicMismatch => {
            warn!(error = %err, "Rejected cross-topic parent");
            ApiResponse::bad_request("CROSS_TOPIC_PARENT", &err.to_string())
        }
        SetParentError::CycleDetected => {
            warn!(error = %err, "Rejected cyclic parent");
            ApiResponse::bad_request("PARENT_CYCLE", &err.to_string())
        }
        SetParentError::RepositoryError(_) => {
            error!(error = %err, "Setting parent failed");
            ApiResponse::internal_error()
        }
    }
}

/// Thread a message under another message of the same topic
#[utoipa::path(
    put,
    path = "/api/messages/{id}/parent",
    tag = "messages",
    params(("id" = i64, Path, description = "Child message id")),
    request_body = SetParentRequest,
    responses(
        (status = 200, description = "Parent set", body = OkResponse),
        (status = 400, description = "Different topics or the link would form a cycle", body = ErrorResponse),
        (status = 404, description = "Parent or child not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/messages/{id}/parent")]
pub async fn set_parent_handler(
    path: web::Path<i64>,
    req: web::Json<SetParentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let child = MessageId::from(path.into_inner());
    let parent = MessageId::from(req.parent_id);

    match data.message.set_parent.execute(parent, child).await {
        Ok(()) => ApiResponse::ok(),
        Err(e) => map_set_parent_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryForum;

    async fn link(store: InMemoryForum, child: MessageId, parent: MessageId) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store).build())
                .service(set_parent_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/messages/{}/parent", child.value()))
            .set_json(json!({ "parent_id": parent.value() }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_set_parent_success() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        let topic = store.seed_topic("Rust", alice);
        let parent = store.seed_message(topic, alice, "q");
        let child = store.seed_message(topic, alice, "a");

        let (status, body) = link(store.clone(), child, parent).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(store.message(child).unwrap().parent_id, Some(parent));
    }

    #[actix_web::test]
    async fn test_set_parent_cross_topic_bad_request() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        let rust = store.seed_topic("Rust", alice);
        let go = store.seed_topic("Go", alice);
        let parent = store.seed_message(rust, alice, "q");
        let child = store.seed_message(go, alice, "a");

        let (status, body) = link(store, child, parent).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "CROSS_TOPIC_PARENT");
    }

    #[actix_web::test]
    async fn test_set_parent_to_self_bad_request() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        let topic = store.seed_topic("Rust", alice);
        let id = store.seed_message(topic, alice, "q");

        let (status, body) = link(store, id, id).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "PARENT_CYCLE");
    }

    #[actix_web::test]
    async fn test_set_parent_missing_parent_not_found() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        let topic = store.seed_topic("Rust", alice);
        let child = store.seed_message(topic, alice, "a");

        let (status, body) = link(store, child, MessageId::from(99)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PARENT_NOT_FOUND");
    }
}
