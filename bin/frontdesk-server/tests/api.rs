//! Endpoint tests against the full router, backed by the in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use frontdesk_core::NewContactMessage;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use frontdesk_server::config::Config;
use frontdesk_server::db::{ContactMessage, MemoryStore, MessageStore, StoreError};
use frontdesk_server::routes;
use frontdesk_server::state::AppState;

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".to_owned(),
        database_url: String::new(),
        log_level: "info".to_owned(),
        log_json: false,
        cors_allowed_origins: None,
        enable_swagger: false,
        admin_token: None,
        static_dir: None,
    }
}

fn app_with<S: MessageStore>(config: Config, store: S) -> (Router, Arc<AppState<S>>) {
    let state = Arc::new(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
    });
    (routes::build(Arc::clone(&state)), state)
}

fn app() -> (Router, Arc<AppState<MemoryStore>>) {
    app_with(test_config(), MemoryStore::default())
}

fn valid_payload() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john@co.com",
        "service": "Cloud Solutions",
        "message": "Need help"
    })
}

fn post_contact(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_messages() -> Request<Body> {
    Request::builder()
        .uri("/api/contact-messages")
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}

fn cited_fields(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().expect("field name"))
        .collect()
}

// ── Submission ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_is_stored_and_confirmed() {
    let (app, state) = app();

    let response = app.oneshot(post_contact(&valid_payload())).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(!body["message"].as_str().expect("message").is_empty());
    let id = body["id"].as_str().expect("id").to_owned();
    assert!(!id.is_empty());

    let stored = state.store.list_all().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].first_name, "John");
    assert_eq!(stored[0].last_name, "Doe");
    assert_eq!(stored[0].email, "john@co.com");
    assert_eq!(stored[0].service, "Cloud Solutions");
    assert_eq!(stored[0].message, "Need help");
    assert_eq!(stored[0].phone, None);
}

#[tokio::test]
async fn empty_first_name_is_rejected_and_nothing_is_stored() {
    let (app, state) = app();
    let mut payload = valid_payload();
    payload["firstName"] = json!("");

    let response = app.oneshot(post_contact(&payload)).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Please check your form data");
    assert!(cited_fields(&body).contains(&"firstName"));

    assert!(state.store.list_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn each_missing_required_field_is_cited() {
    for field in ["firstName", "lastName", "email", "service", "message"] {
        let (app, state) = app();
        let mut payload = valid_payload();
        payload.as_object_mut().expect("object").remove(field);

        let response = app.oneshot(post_contact(&payload)).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field: {field}");

        let body = body_json(response).await;
        assert!(
            cited_fields(&body).contains(&field),
            "expected {field} cited, got {body}"
        );
        assert!(state.store.list_all().await.expect("list").is_empty());
    }
}

#[tokio::test]
async fn email_without_domain_is_rejected() {
    let (app, _state) = app();
    let mut payload = valid_payload();
    payload["email"] = json!("not-an-email");

    let response = app.oneshot(post_contact(&payload)).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(cited_fields(&body_json(response).await), ["email"]);
}

#[tokio::test]
async fn omitted_phone_is_accepted_and_stays_omitted() {
    let (app, _state) = app();

    let response = app
        .clone()
        .oneshot(post_contact(&valid_payload()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let listing = app.oneshot(get_messages()).await.expect("response");
    let body = body_json(listing).await;
    let record = &body.as_array().expect("array")[0];
    assert!(record.get("phone").is_none(), "phone key present: {record}");
}

#[tokio::test]
async fn resubmission_creates_a_second_record() {
    let (app, state) = app();

    let first = body_json(
        app.clone()
            .oneshot(post_contact(&valid_payload()))
            .await
            .expect("response"),
    )
    .await;
    let second = body_json(
        app.oneshot(post_contact(&valid_payload()))
            .await
            .expect("response"),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(state.store.list_all().await.expect("list").len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_submissions_get_distinct_ids() {
    let (app, state) = app();

    let (a, b) = tokio::join!(
        app.clone().oneshot(post_contact(&valid_payload())),
        app.clone().oneshot(post_contact(&valid_payload())),
    );
    let a = body_json(a.expect("response")).await;
    let b = body_json(b.expect("response")).await;

    assert_eq!(a["success"], true);
    assert_eq!(b["success"], true);
    assert_ne!(a["id"], b["id"]);
    assert_eq!(state.store.list_all().await.expect("list").len(), 2);
}

// ── Listing ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn listing_returns_records_oldest_first() {
    let (app, _state) = app();

    for name in ["Ada", "Grace"] {
        let mut payload = valid_payload();
        payload["firstName"] = json!(name);
        let response = app
            .clone()
            .oneshot(post_contact(&payload))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get_messages()).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body.as_array().expect("array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["firstName"], "Ada");
    assert_eq!(records[1]["firstName"], "Grace");
    for record in records {
        assert!(!record["id"].as_str().expect("id").is_empty());
        assert!(!record["createdAt"].as_str().expect("createdAt").is_empty());
    }
}

#[tokio::test]
async fn empty_store_lists_an_empty_array() {
    let (app, _state) = app();
    let response = app.oneshot(get_messages()).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ── Failure paths ─────────────────────────────────────────────────────────────

/// Store whose persistence layer is permanently down.
#[derive(Debug)]
struct FailingStore;

impl MessageStore for FailingStore {
    async fn create(&self, _submission: NewContactMessage) -> Result<ContactMessage, StoreError> {
        Err(StoreError::Unavailable("disk full".to_owned()))
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Err(StoreError::Unavailable("disk full".to_owned()))
    }
}

#[tokio::test]
async fn store_fault_on_submit_answers_generic_500() {
    let (app, _state) = app_with(test_config(), FailingStore);

    let response = app.oneshot(post_contact(&valid_payload())).await.expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to send message. Please try again.");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn store_fault_on_listing_answers_generic_500() {
    let (app, _state) = app_with(test_config(), FailingStore);

    let response = app.oneshot(get_messages()).await.expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to retrieve messages");
}

// ── Admin token ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn configured_admin_token_guards_the_listing() {
    let config = Config {
        admin_token: Some("sesame".to_owned()),
        ..test_config()
    };
    let (app, _state) = app_with(config, MemoryStore::default());

    let response = app
        .clone()
        .oneshot(get_messages())
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let authed = Request::builder()
        .uri("/api/contact-messages")
        .header(header::AUTHORIZATION, "Bearer sesame")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(authed).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    // The intake route stays public even with a token configured.
    let response = app
        .oneshot(post_contact(&valid_payload()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
