use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
};
use crate::topic::application::ports::outgoing::TopicQueryResult;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    /// Unique, at most 255 characters
    #[schema(example = "Ownership questions")]
    pub title: String,

    /// Username of the creator
    #[schema(example = "alice")]
    pub username: String,
}

//
// ──────────────────────────────────────────────────────────
// Error mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> HttpResponse {
    let code = match err {
        CreateTopicCommandError::EmptyTitle | CreateTopicCommandError::TitleTooLong => {
            "INVALID_TITLE"
        }
        CreateTopicCommandError::EmptyUsername => "INVALID_USERNAME",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_create_topic_error(err: CreateTopicError, req: &CreateTopicRequest) -> HttpResponse {
    match &err {
        CreateTopicError::CreatorNotFound => {
            warn!(username = %req.username, "Topic creator not found");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        CreateTopicError::TopicAlreadyExists => {
            warn!(title = %req.title, "Topic title already exists");
            ApiResponse::conflict("TOPIC_ALREADY_EXISTS", "Topic already exists")
        }
        CreateTopicError::RepositoryError(_) => {
            error!(title = %req.title, username = %req.username, error = %err, "Topic creation failed");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Open a new topic
///
/// Increments the creator's `topics_opened` counter.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicQueryResult>)),
        (status = 400, description = "Invalid title or username", body = ErrorResponse),
        (status = 404, description = "Creator not found", body = ErrorResponse),
        (status = 409, description = "Title already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    req: web::Json<CreateTopicRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateTopicCommand::new(req.title.clone(), req.username.clone()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, title = %topic.title, "Topic created");
            ApiResponse::created(topic)
        }
        Err(e) => map_create_topic_error(e, &req),
    }
}
