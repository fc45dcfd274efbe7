//! Wire types for the contact API.
//!
//! Shared by the server (response construction, OpenAPI schema) and the
//! client (response parsing) so the two sides cannot drift apart.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::FieldError;

/// Body of a successful `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub success: bool,
    /// Human-readable confirmation shown to the visitor.
    pub message: String,
    /// Identifier the store assigned to the new record.
    pub id: String,
}

/// Body of every failure response (400 and 500 alike).
///
/// `errors` is populated only for validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// One stored contact message as returned by `GET /api/contact-messages`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    /// RFC 3339 creation timestamp assigned by the store.
    pub created_at: String,
}
