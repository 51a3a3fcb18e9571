use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::domain::entities::VoteDirection;
use crate::topic::application::ports::incoming::use_cases::VoteTopicError;
use crate::AppState;

async fn vote(data: &AppState, title: &str, direction: VoteDirection) -> HttpResponse {
    match data.topic.vote.execute(title, direction).await {
        Ok(()) => ApiResponse::ok(),
        Err(VoteTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(e @ VoteTopicError::RepositoryError(_)) => {
            error!(title, ?direction, error = %e, "Vote failed");
            ApiResponse::internal_error()
        }
    }
}

/// Add one vote to a topic
#[utoipa::path(
    post,
    path = "/api/topics/{title}/upvote",
    tag = "topics",
    params(("title" = String, Path, description = "Exact, case-sensitive title")),
    responses(
        (status = 200, description = "Vote recorded", body = OkResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics/{title}/upvote")]
pub async fn upvote_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    vote(&data, &path.into_inner(), VoteDirection::Up).await
}

/// Remove one vote from a topic; the count may go negative
#[utoipa::path(
    post,
    path = "/api/topics/{title}/downvote",
    tag = "topics",
    params(("title" = String, Path, description = "Exact, case-sensitive title")),
    responses(
        (status = 200, description = "Vote recorded", body = OkResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics/{title}/downvote")]
pub async fn downvote_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    vote(&data, &path.into_inner(), VoteDirection::Down).await
}
