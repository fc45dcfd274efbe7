//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `FRONTDESK_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - The contact intake and listing routes under `/api`
//! - Optional static hosting of the built marketing site

mod contact;
pub mod doc;
mod health;

use std::sync::Arc;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::MessageStore;
use crate::middleware::{cors, trace};
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build<S: MessageStore>(state: Arc<AppState<S>>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .merge(contact::router(&state));

    // ── Swagger UI ────────────────────────────────────────────────────────────
    // Enabled by default; disable with FRONTDESK_ENABLE_SWAGGER=false in
    // production to avoid exposing the API structure to potential attackers.
    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    // ── Static marketing site ─────────────────────────────────────────────────
    if let Some(dir) = &state.config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(&state.config)))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}
