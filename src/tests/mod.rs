pub mod support;

use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, App,
};
use serde_json::{json, Value};

use crate::shared::api::custom_json_config;
use support::app_state_builder::TestAppStateBuilder;
use support::in_memory::InMemoryForum;

// ============================================================
// Helpers
// ============================================================

/// Full route table over real services backed by `$store`.
macro_rules! forum_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store($store).build())
                .app_data(custom_json_config())
                .configure(crate::init_routes),
        )
        .await
    };
}

async fn send<S, R>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn user_row<'a>(users: &'a Value, username: &str) -> &'a Value {
    users["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == username)
        .unwrap()
}

// ============================================================
// Flows
// ============================================================

#[actix_web::test]
async fn forum_walkthrough_keeps_counters_consistent() {
    let app = forum_app!(InMemoryForum::new());

    let (status, _) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "alice", "email": "a@x.com", "password": "pw" }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, topic) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/topics")
            .set_json(json!({ "title": "T", "username": "alice" }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let topic_id = topic["data"]["id"].as_i64().unwrap();

    let (_, users) = send(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(user_row(&users, "alice")["topics_opened"], 1);

    let (status, message) = send(
        &app,
        test::TestRequest::post().uri("/api/messages").set_json(json!({
            "topic_title": "T",
            "message": "hi",
            "username": "alice",
        }))
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let message_id = message["data"]["id"].as_i64().unwrap();

    let (_, users) = send(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(user_row(&users, "alice")["messages_sent"], 1);
    let (_, topic) = send(&app, test::TestRequest::get().uri("/api/topics/T").to_request()).await;
    assert_eq!(topic["data"]["messages"], 1);

    let messages_uri = format!("/api/topics/id/{topic_id}/messages");

    let (status, _) = send(
        &app,
        test::TestRequest::post().uri(&format!("/api/messages/{message_id}/like")).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, messages) = send(&app, test::TestRequest::get().uri(&messages_uri).to_request()).await;
    assert_eq!(messages["data"][0]["likes"], 1);

    let (status, _) = send(
        &app,
        test::TestRequest::post().uri(&format!("/api/messages/{message_id}/dislike")).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, messages) = send(&app, test::TestRequest::get().uri(&messages_uri).to_request()).await;
    assert_eq!(messages["data"][0]["likes"], 0);

    let (_, count) = send(
        &app,
        test::TestRequest::get().uri("/api/stats/topics").to_request(),
    )
    .await;
    assert_eq!(count["data"]["count"], 1);
}

#[actix_web::test]
async fn password_change_and_reset_rotate_credentials() {
    let store = InMemoryForum::new();
    store.seed_user_with_password("alice", "a@x.com", "old");
    let app = forum_app!(store);

    let verify = |password: &str| {
        test::TestRequest::post()
            .uri("/api/users/verify")
            .set_json(json!({ "username": "alice", "password": password }))
    };

    let (status, _) = send(
        &app,
        test::TestRequest::put().uri("/api/users/password").set_json(json!({
            "username": "alice",
            "current_password": "old",
            "new_password": "new",
        }))
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, old) = send(&app, verify("old").to_request()).await;
    let (_, new) = send(&app, verify("new").to_request()).await;
    assert_eq!(old["data"]["valid"], false);
    assert_eq!(new["data"]["valid"], true);

    let (status, issued) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/users/password-reset")
            .set_json(json!({ "email": "a@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let code = issued["data"]["reset_code"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        test::TestRequest::put().uri("/api/users/password-reset").set_json(json!({
            "email": "a@x.com",
            "code": code,
            "new_password": "reset",
        }))
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, reset) = send(&app, verify("reset").to_request()).await;
    assert_eq!(reset["data"]["valid"], true);
}

#[actix_web::test]
async fn renaming_onto_an_existing_name_fails() {
    let store = InMemoryForum::new();
    store.seed_user("anna", "a@x.com");
    let app = forum_app!(store);

    let rename = |from: &str, to: &str| {
        test::TestRequest::put()
            .uri("/api/users/username")
            .set_json(json!({ "username": from, "new_username": to }))
    };

    let (first, _) = send(&app, rename("anna", "bella").to_request()).await;
    let (second, body) = send(&app, rename("bella", "bella").to_request()).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
}

#[actix_web::test]
async fn removing_a_user_orphans_their_content() {
    let store = InMemoryForum::new();
    let alice = store.seed_user("alice", "a@x.com");
    let topic = store.seed_topic("Rust", alice);
    let message = store.seed_message(topic, alice, "hi");
    let app = forum_app!(store.clone());

    let (status, _) = send(
        &app,
        test::TestRequest::delete().uri("/api/users/alice").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, topic) = send(
        &app,
        test::TestRequest::get().uri("/api/topics/Rust").to_request(),
    )
    .await;
    assert_eq!(topic["data"]["creator_id"], Value::Null);
    assert_eq!(store.message(message).unwrap().user_id, None);
    assert!(store.user("alice").is_none());
}

#[actix_web::test]
async fn removing_a_topic_keeps_creator_counters() {
    let store = InMemoryForum::new();
    let alice = store.seed_user("alice", "a@x.com");
    store.seed_topic("Rust", alice);
    let app = forum_app!(store.clone());
    send(
        &app,
        test::TestRequest::post().uri("/api/messages").set_json(json!({
            "topic_title": "Rust",
            "message": "hi",
            "username": "alice",
        }))
        .to_request(),
    )
    .await;

    let (status, _) = send(
        &app,
        test::TestRequest::delete().uri("/api/topics/Rust").to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let alice = store.user("alice").unwrap();
    assert_eq!(alice.topics_opened, 1);
    assert_eq!(alice.messages_sent, 1);
}

#[actix_web::test]
async fn malformed_json_is_a_validation_error() {
    let app = forum_app!(InMemoryForum::new());

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/topics")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ").to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
