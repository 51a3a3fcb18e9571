use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct TopicCountResponse {
    #[schema(example = 42)]
    pub count: u64,
}

/// Number of topics
#[utoipa::path(
    get,
    path = "/api/stats/topics",
    tag = "topics",
    responses(
        (status = 200, description = "Topic count", body = inline(SuccessResponse<TopicCountResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/stats/topics")]
pub async fn count_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.count.execute().await {
        Ok(count) => ApiResponse::success(TopicCountResponse { count }),
        Err(e) => {
            error!(error = %e, "Failed to count topics");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryForum;

    #[actix_web::test]
    async fn test_count_topics() {
        let store = InMemoryForum::new();
        let alice = store.seed_user("alice", "a@x.com");
        store.seed_topic("A", alice);
        store.seed_topic("B", alice);
        store.seed_topic("C", alice);
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store).build())
                .service(count_topics_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/stats/topics").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["count"], 3);
    }
}
