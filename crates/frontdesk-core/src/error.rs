//! Validation failure reporting.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Wire-order of the schema fields; reported errors follow it so callers see
/// a stable, form-shaped listing.
const FIELD_ORDER: &[&str] = &["firstName", "lastName", "email", "phone", "service", "message"];

/// One offending field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Wire name of the field, e.g. `"firstName"`.
    pub field: String,
    pub message: String,
}

/// A failed schema check: every offending field, each with its reason.
///
/// Recoverable by the caller — correct the cited fields and resubmit.
#[derive(Debug, Clone, Serialize, Deserialize, Error, ToSchema)]
#[error("submission failed validation ({} field(s))", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// The reason recorded for `field`, if any.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = Vec::new();
        for (field, field_errors) in source.field_errors() {
            let field = wire_name(field.as_ref());
            for e in field_errors {
                errors.push(FieldError {
                    field: field.to_owned(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                });
            }
        }
        errors.sort_by_key(|e| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        Self { errors }
    }
}

/// `validator` reports Rust field names; the wire contract is camelCase.
fn wire_name(field: &str) -> &str {
    match field {
        "first_name" => "firstName",
        "last_name" => "lastName",
        other => other,
    }
}
