use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::message::application::ports::outgoing::MessageQueryResult;
use crate::shared::api::ApiResponse;
use crate::topic::application::domain::entities::TopicId;
use crate::AppState;

/// List a topic's messages in posting order
///
/// An unknown topic id yields an empty list.
#[utoipa::path(
    get,
    path = "/api/topics/id/{topic_id}/messages",
    tag = "messages",
    params(("topic_id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Messages with parent links and like counts", body = [MessageQueryResult]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics/id/{topic_id}/messages")]
pub async fn get_messages_by_topic_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());

    match data.message.get_by_topic.execute(topic_id).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => {
            error!(%topic_id, error = %e, "Failed to list messages");
            ApiResponse::internal_error()
        }
    }
}
