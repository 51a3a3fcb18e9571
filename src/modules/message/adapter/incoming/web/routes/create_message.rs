use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::message::application::ports::incoming::use_cases::{
    CreateMessageCommand, CreateMessageCommandError, CreateMessageError,
};
use crate::message::application::ports::outgoing::MessageQueryResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    #[schema(example = "Ownership questions")]
    pub topic_title: String,

    /// Stored verbatim
    #[schema(example = "hi")]
    pub message: String,

    #[schema(example = "alice")]
    pub username: String,
}

fn map_create_message_error(err: CreateMessageError, req: &CreateMessageRequest) -> HttpResponse {
    match &err {
        CreateMessageError::AuthorNotFound => {
            warn!(username = %req.username, "Message author not found");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        CreateMessageError::TopicNotFound => {
            warn!(topic = %req.topic_title, "Message topic not found");
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        CreateMessageError::RepositoryError(_) => {
            error!(topic = %req.topic_title, username = %req.username, error = %err, "Posting message failed");
            ApiResponse::internal_error()
        }
    }
}

/// Post a message in a topic
///
/// Increments the author's `messages_sent` and the topic's `messages` counters.
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = inline(SuccessResponse<MessageQueryResult>)),
        (status = 400, description = "Blank topic, body or username", body = ErrorResponse),
        (status = 404, description = "Author or topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/messages")]
pub async fn create_message_handler(
    req: web::Json<CreateMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateMessageCommand::new(
        req.topic_title.clone(),
        req.message.clone(),
        req.username.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            let code = match e {
                CreateMessageCommandError::EmptyTopic => "INVALID_TOPIC",
                CreateMessageCommandError::EmptyMessage => "INVALID_MESSAGE",
                CreateMessageCommandError::EmptyUsername => "INVALID_USERNAME",
            };
            return ApiResponse::bad_request(code, &e.to_string());
        }
    };

    match data.message.create.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(e) => map_create_message_error(e, &req),
    }
}
