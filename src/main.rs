pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::message;
pub use modules::topic;
pub use modules::user;

use crate::config::AppConfig;
use crate::message::adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres};
use crate::message::application::message_use_cases::MessageUseCases;
use crate::shared::api::custom_json_config;
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::helpers::TopicIdentityResolver;
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::user::adapter::outgoing::security::{Argon2Hasher, RandomResetCodeGenerator};
use crate::user::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::user::application::helpers::UserIdentityResolver;
use crate::user::application::user_use_cases::UserUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub topic: TopicUseCases,
    pub message: MessageUseCases,
}

impl AppState {
    /// Wires every manager over the Postgres adapters sharing one pool.
    pub fn postgres(db: Arc<DatabaseConnection>, hasher: Argon2Hasher) -> Self {
        let user_query = UserQueryPostgres::new(Arc::clone(&db));
        let topic_query = TopicQueryPostgres::new(Arc::clone(&db));

        let users = UserIdentityResolver::new(Arc::new(user_query.clone()));
        let topics = TopicIdentityResolver::new(Arc::new(topic_query.clone()));

        Self {
            user: UserUseCases::new(
                user_query,
                UserRepositoryPostgres::new(Arc::clone(&db)),
                Arc::new(hasher),
                Arc::new(RandomResetCodeGenerator),
            ),
            topic: TopicUseCases::new(
                topic_query,
                TopicRepositoryPostgres::new(Arc::clone(&db)),
                users.clone(),
            ),
            message: MessageUseCases::new(
                MessageQueryPostgres::new(Arc::clone(&db)),
                MessageRepositoryPostgres::new(db),
                users,
                topics,
            ),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let settings = &config.database;
    let mut opt = ConnectOptions::new(settings.url.clone());
    opt.max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .connect_timeout(settings.connect_timeout)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let hasher = Argon2Hasher::from_env().context("Invalid Argon2 parameters")?;
    let state = AppState::postgres(Arc::clone(&db_arc), hasher);
    let openapi = api::openapi::ApiDoc::openapi();

    info!(environment = %config.environment, "Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::verify_credentials_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::change_password_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::change_email_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::change_username_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::remove_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::issue_reset_code_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::reset_password_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_by_title_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::remove_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::upvote_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::downvote_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::count_topics_handler);
    // Messages
    cfg.service(crate::message::adapter::incoming::web::routes::get_messages_by_topic_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::create_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::set_parent_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::like_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::dislike_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
