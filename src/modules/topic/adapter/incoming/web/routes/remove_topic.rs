use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::RemoveTopicError;
use crate::AppState;

/// Remove a topic together with all of its messages
#[utoipa::path(
    delete,
    path = "/api/topics/{title}",
    tag = "topics",
    params(("title" = String, Path, description = "Exact, case-sensitive title")),
    responses(
        (status = 204, description = "Topic and its messages removed"),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/topics/{title}")]
pub async fn remove_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let title = path.into_inner();

    match data.topic.remove.execute(&title).await {
        Ok(()) => {
            info!(title = %title, "Topic removed");
            ApiResponse::no_content()
        }
        Err(RemoveTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(e @ RemoveTopicError::RepositoryError(_)) => {
            error!(title = %title, error = %e, "Topic removal failed");
            ApiResponse::internal_error()
        }
    }
}
