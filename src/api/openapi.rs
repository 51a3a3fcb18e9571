use crate::api::schemas::{ErrorDetail, ErrorResponse, OkResponse};
use utoipa::OpenApi;

use crate::health::{HealthResponse, ReadinessResponse};
use crate::message::adapter::incoming::web::routes::{CreateMessageRequest, SetParentRequest};
use crate::message::application::ports::outgoing::MessageQueryResult;
use crate::topic::adapter::incoming::web::routes::{CreateTopicRequest, TopicCountResponse};
use crate::topic::application::ports::outgoing::TopicQueryResult;
use crate::user::adapter::incoming::web::routes::{
    ChangeEmailRequest, ChangePasswordRequest, ChangeUsernameRequest, IssueResetCodeRequest,
    RegisterUserRequest, ResetCodeResponse, ResetPasswordRequest, VerifyCredentialsRequest,
    VerifyCredentialsResponse,
};
use crate::user::application::ports::incoming::use_cases::UserView;
use crate::user::application::ports::outgoing::UserResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum API",
        version = "1.0.0",
        description = "Users, topics and threaded messages of a discussion forum"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // User endpoints
        crate::user::adapter::incoming::web::routes::register_user_handler,
        crate::user::adapter::incoming::web::routes::get_users_handler,
        crate::user::adapter::incoming::web::routes::verify_credentials_handler,
        crate::user::adapter::incoming::web::routes::change_password_handler,
        crate::user::adapter::incoming::web::routes::change_email_handler,
        crate::user::adapter::incoming::web::routes::change_username_handler,
        crate::user::adapter::incoming::web::routes::remove_user_handler,
        crate::user::adapter::incoming::web::routes::issue_reset_code_handler,
        crate::user::adapter::incoming::web::routes::reset_password_handler,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_by_title_handler,
        crate::topic::adapter::incoming::web::routes::remove_topic_handler,
        crate::topic::adapter::incoming::web::routes::upvote_topic_handler,
        crate::topic::adapter::incoming::web::routes::downvote_topic_handler,
        crate::topic::adapter::incoming::web::routes::count_topics_handler,

        // Message endpoints
        crate::message::adapter::incoming::web::routes::create_message_handler,
        crate::message::adapter::incoming::web::routes::get_messages_by_topic_handler,
        crate::message::adapter::incoming::web::routes::set_parent_handler,
        crate::message::adapter::incoming::web::routes::like_message_handler,
        crate::message::adapter::incoming::web::routes::dislike_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            OkResponse,
            ErrorResponse,
            ErrorDetail,
            HealthResponse,
            ReadinessResponse,

            // User DTOs
            RegisterUserRequest,
            UserResult,
            UserView,
            VerifyCredentialsRequest,
            VerifyCredentialsResponse,
            ChangePasswordRequest,
            ChangeEmailRequest,
            ChangeUsernameRequest,
            IssueResetCodeRequest,
            ResetCodeResponse,
            ResetPasswordRequest,

            // Topic DTOs
            CreateTopicRequest,
            TopicQueryResult,
            TopicCountResponse,

            // Message DTOs
            CreateMessageRequest,
            SetParentRequest,
            MessageQueryResult
        )
    ),
    tags(
        (name = "users", description = "Registration, credentials and account management"),
        (name = "topics", description = "Topic lifecycle, votes and statistics"),
        (name = "messages", description = "Posting, threading and reactions"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
