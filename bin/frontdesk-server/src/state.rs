//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;

/// State shared across all HTTP handlers.
///
/// Constructed once in `main` (or a test harness) and passed to
/// [`crate::routes::build`]; there is no process-global store instance.
/// `S` is the message-store backend, [`crate::db::SqliteStore`] in
/// production and [`crate::db::MemoryStore`] in tests.
#[derive(Debug)]
pub struct AppState<S> {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// The one shared mutable resource: the contact-message store.
    pub store: Arc<S>,
}
