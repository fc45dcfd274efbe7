//! The contact-form submission schema.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ValidationError;

/// The service catalog offered in the site's "what are you interested in?"
/// select input.  `service` stays free text on the wire; this list is
/// advisory for form UIs.
pub const SERVICES: &[&str] = &[
    "Cloud Solutions",
    "AI & Machine Learning",
    "Cybersecurity",
    "Mobile Solutions",
    "Data Analytics",
    "Custom Software",
    "Other",
];

/// A contact-form submission before the store has seen it.
///
/// All fields default to empty on deserialization so a payload with missing
/// keys reaches [`NewContactMessage::validated`] and comes back as per-field
/// errors instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContactMessage {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    /// Rejects the empty string as well, so no separate "required" rule.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Please select a service"))]
    pub service: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl NewContactMessage {
    /// Run the schema checks and return the submission unchanged on success.
    ///
    /// This is the single enforcement point shared by the server boundary
    /// and the client form.  On failure no partially-normalized value
    /// escapes — callers get only the per-field error list.
    pub fn validated(self) -> Result<Self, ValidationError> {
        match Validate::validate(&self) {
            Ok(()) => Ok(self),
            Err(errors) => Err(errors.into()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
