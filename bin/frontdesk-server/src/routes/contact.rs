//! Contact intake and listing endpoints.
//!
//! `POST /api/contact` is the sole write entry point for new messages:
//! validate first, touch the store only on success, never commit partial
//! state.  `GET /api/contact-messages` is the read-only admin listing.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use frontdesk_core::NewContactMessage;
use frontdesk_core::api::{MessageResponse, SubmitResponse};
use tracing::info;
use utoipa::OpenApi;

use crate::db::MessageStore;
use crate::error::ServerError;
use crate::middleware::auth;
use crate::state::AppState;

/// Confirmation shown to the visitor after a stored submission.
const SUBMIT_CONFIRMATION: &str =
    "Your message has been sent successfully! We'll get back to you within 24 hours.";
/// Generic text for a store fault during submission.
const SUBMIT_FAILURE: &str = "Failed to send message. Please try again.";
/// Generic text for a store fault during listing.
const LIST_FAILURE: &str = "Failed to retrieve messages";

#[derive(OpenApi)]
#[openapi(
    paths(submit_message, list_messages),
    components(schemas(
        NewContactMessage,
        SubmitResponse,
        MessageResponse,
        frontdesk_core::api::ErrorResponse,
        frontdesk_core::FieldError,
    ))
)]
pub struct ContactApi;

/// Register contact routes.
///
/// The listing route carries the optional admin bearer-token check; the
/// intake route is public.
pub fn router<S: MessageStore>(state: &Arc<AppState<S>>) -> Router<Arc<AppState<S>>> {
    let admin = Router::new()
        .route("/api/contact-messages", get(list_messages::<S>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.config),
            auth::check_admin_auth,
        ));

    Router::new()
        .route("/api/contact", post(submit_message::<S>))
        .merge(admin)
}

// ── Contact handlers ──────────────────────────────────────────────────────────

/// Accept a contact-form submission.
///
/// Runs the shared schema check before the store sees anything; a failure
/// answers 400 with the per-field error list and leaves the store untouched.
/// Not idempotent: a retried submission creates another record.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = NewContactMessage,
    responses(
        (status = 200, description = "Message stored", body = SubmitResponse),
        (status = 400, description = "Validation failure", body = frontdesk_core::api::ErrorResponse),
        (status = 500, description = "Store fault", body = frontdesk_core::api::ErrorResponse),
    )
)]
pub async fn submit_message<S: MessageStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(payload): Json<NewContactMessage>,
) -> Result<Json<SubmitResponse>, ServerError> {
    let submission = payload.validated()?;
    let stored = state
        .store
        .create(submission)
        .await
        .map_err(|e| ServerError::storage(SUBMIT_FAILURE, e))?;

    info!(id = %stored.id, service = %stored.service, "contact message stored");
    Ok(Json(SubmitResponse {
        success: true,
        message: SUBMIT_CONFIRMATION.to_owned(),
        id: stored.id,
    }))
}

/// List every stored contact message, oldest first (admin use).
#[utoipa::path(
    get,
    path = "/api/contact-messages",
    tag = "contact",
    responses(
        (status = 200, description = "All stored messages", body = Vec<MessageResponse>),
        (status = 401, description = "Missing or wrong admin token", body = frontdesk_core::api::ErrorResponse),
        (status = 500, description = "Store fault", body = frontdesk_core::api::ErrorResponse),
    )
)]
pub async fn list_messages<S: MessageStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<MessageResponse>>, ServerError> {
    let messages = state
        .store
        .list_all()
        .await
        .map_err(|e| ServerError::storage(LIST_FAILURE, e))?;
    Ok(Json(messages.iter().map(|m| m.to_response()).collect()))
}
