//! In-memory implementation of [`MessageStore`].
//!
//! Backs tests and ephemeral deployments where nothing needs to survive a
//! restart.  The mutex is held across identifier assignment and the push, so
//! concurrent `create` calls cannot interleave between the two.

use std::sync::Mutex;

use chrono::Utc;
use frontdesk_core::NewContactMessage;
use uuid::Uuid;

use super::{ContactMessage, MessageStore, StoreError};

/// Contact messages kept in a `Vec`, insertion order preserved.
#[derive(Debug, Default)]
pub struct MemoryStore {
    messages: Mutex<Vec<ContactMessage>>,
}

impl MessageStore for MemoryStore {
    async fn create(&self, submission: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let record = ContactMessage {
            id: Uuid::new_v4().to_string(),
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            phone: submission.phone,
            service: submission.service,
            message: submission.message,
            created_at: Utc::now(),
        };
        let mut messages = self
            .messages
            .lock()
            .map_err(|_| StoreError::Unavailable("message store mutex poisoned".to_owned()))?;
        messages.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let messages = self
            .messages
            .lock()
            .map_err(|_| StoreError::Unavailable("message store mutex poisoned".to_owned()))?;
        Ok(messages.clone())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
