//! Message-store abstraction layer.
//!
//! [`MessageStore`] defines the interface for keeping contact messages.  The
//! production implementation is [`sqlite::SqliteStore`]; [`memory::MemoryStore`]
//! backs tests and ephemeral deployments.  Handlers are generic over the
//! trait, so swapping backends never touches endpoint code.
//!
//! All trait methods use `impl Future` in their signatures (stable since Rust
//! 1.75) so no extra `async-trait` crate is required.

pub mod memory;
pub mod sqlite;

use chrono::{DateTime, Utc};
use frontdesk_core::NewContactMessage;
use frontdesk_core::api::MessageResponse;
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A single row in the `contact_messages` table.
///
/// Created exclusively through [`MessageStore::create`]; never mutated and
/// never deleted afterwards.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    /// Store-assigned UUID, unique across all messages.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    /// Timestamp assigned by the store at creation.
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn to_response(&self) -> MessageResponse {
        MessageResponse {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// A persistence fault.  Endpoints translate this into a generic
/// server-error response; the detail stays in the server logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for keeping contact messages.
///
/// `create` accepts a schema-validated submission (no re-validation here),
/// assigns the `id` and `created_at`, and returns the stored record.
/// Identifier assignment is atomic relative to concurrent `create` calls.
/// `list_all` returns every stored message oldest-first.
pub trait MessageStore: Send + Sync + 'static {
    fn create(
        &self,
        submission: NewContactMessage,
    ) -> impl std::future::Future<Output = Result<ContactMessage, StoreError>> + Send;

    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactMessage>, StoreError>> + Send;
}
