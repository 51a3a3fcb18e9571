use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::GetTopicByTitleError;
use crate::topic::application::ports::outgoing::TopicQueryResult;
use crate::AppState;

/// Fetch a topic by its exact title
#[utoipa::path(
    get,
    path = "/api/topics/{title}",
    tag = "topics",
    params(("title" = String, Path, description = "Exact, case-sensitive title")),
    responses(
        (status = 200, description = "Topic found", body = inline(SuccessResponse<TopicQueryResult>)),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics/{title}")]
pub async fn get_topic_by_title_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let title = path.into_inner();

    match data.topic.get_by_title.execute(&title).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(GetTopicByTitleError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(e @ GetTopicByTitleError::QueryFailed(_)) => {
            error!(title = %title, error = %e, "Failed to fetch topic");
            ApiResponse::internal_error()
        }
    }
}
