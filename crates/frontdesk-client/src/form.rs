//! Contact-form state machine.
//!
//! Runs the shared schema locally before submitting, so a visitor gets
//! field-level feedback without a round-trip and the server still enforces
//! the same rules.  Failed submissions never clear the visitor's input.

use frontdesk_core::{FieldError, NewContactMessage};
use tracing::debug;

use crate::api::{ApiClient, ClientError, SubmitOutcome};

/// Prompt shown when the server (or the network) failed outright.
const RETRY_PROMPT: &str = "Please try again later.";

/// Display state of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Collecting or correcting input.
    #[default]
    Editing,
    /// The last submission was stored; the form shows its thank-you state.
    Submitted,
}

/// Field state plus outcome messaging for the contact form.
///
/// `phone` is plain text here; an empty input becomes an omitted field on
/// the wire.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,

    field_errors: Vec<FieldError>,
    general_error: Option<String>,
    status: FormStatus,
}

impl ContactForm {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The reason recorded against `field` (wire name), if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Set after a server fault or transport failure; a retry prompt.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Check the current input against the shared schema, recording any
    /// per-field reasons.  Returns `true` when the input would be accepted.
    pub fn validate(&mut self) -> bool {
        match self.to_submission().validated() {
            Ok(_) => {
                self.field_errors.clear();
                true
            }
            Err(e) => {
                self.field_errors = e.errors;
                false
            }
        }
    }

    /// Validate, then submit to the server.
    ///
    /// Returns `true` when the message was stored; the form then clears and
    /// flips to [`FormStatus::Submitted`].  On any failure the input stays
    /// untouched so the visitor can correct and resubmit.
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        self.general_error = None;
        if !self.validate() {
            return false;
        }

        match client.submit(&self.to_submission()).await {
            Ok(SubmitOutcome::Accepted { id, .. }) => {
                debug!(%id, "contact message accepted");
                self.clear_fields();
                self.field_errors.clear();
                self.status = FormStatus::Submitted;
                true
            }
            Ok(SubmitOutcome::Rejected { message, errors }) => {
                self.field_errors = errors;
                self.general_error = Some(message);
                false
            }
            Err(ClientError::Server(message)) => {
                self.general_error = Some(message);
                false
            }
            Err(ClientError::Transport(e)) => {
                debug!(error = %e, "contact submission failed in transport");
                self.general_error = Some(RETRY_PROMPT.to_owned());
                false
            }
        }
    }

    /// Back to a blank editing state ("Send Another Message").
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn to_submission(&self) -> NewContactMessage {
        NewContactMessage {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: if self.phone.is_empty() {
                None
            } else {
                Some(self.phone.clone())
            },
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }

    fn clear_fields(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.service.clear();
        self.message.clear();
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
