use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::api::schemas::{ErrorResponse, OkResponse};
use crate::message::application::domain::entities::{MessageId, Reaction};
use crate::message::application::ports::incoming::use_cases::ReactToMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn react(data: &AppState, id: MessageId, reaction: Reaction) -> HttpResponse {
    match data.message.react.execute(id, reaction).await {
        Ok(()) => ApiResponse::ok(),
        Err(ReactToMessageError::MessageNotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(e @ ReactToMessageError::RepositoryError(_)) => {
            error!(%id, ?reaction, error = %e, "Reaction failed");
            ApiResponse::internal_error()
        }
    }
}

/// Like a message
#[utoipa::path(
    post,
    path = "/api/messages/{id}/like",
    tag = "messages",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "Like recorded", body = OkResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/messages/{id}/like")]
pub async fn like_message_handler(path: web::Path<i64>, data: web::Data<AppState>) -> HttpResponse {
    react(&data, MessageId::from(path.into_inner()), Reaction::Like).await
}

/// Dislike a message; likes may go negative
#[utoipa::path(
    post,
    path = "/api/messages/{id}/dislike",
    tag = "messages",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "Dislike recorded", body = OkResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/messages/{id}/dislike")]
pub async fn dislike_message_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> HttpResponse {
    react(&data, MessageId::from(path.into_inner()), Reaction::Dislike).await
}
