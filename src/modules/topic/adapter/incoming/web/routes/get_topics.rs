use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::outgoing::TopicQueryResult;
use crate::AppState;

/// List every topic
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "All topics in creation order", body = [TopicQueryResult]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(e) => {
            error!(error = %e, "Failed to list topics");
            ApiResponse::internal_error()
        }
    }
}
