//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! **Security note:** Storage faults are logged with full detail but only a
//! generic message is returned to the caller so that file paths, SQL, or
//! other implementation details never leak to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frontdesk_core::ValidationError;
use frontdesk_core::api::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;

/// Message accompanying every validation-failure response.
pub const VALIDATION_FAILURE: &str = "Please check your form data";

/// All errors that can occur in the frontdesk-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The submission failed the shared schema check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The message store failed; `public` is the only text clients see.
    #[error("storage error: {source}")]
    Storage {
        public: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServerError {
    pub fn storage(public: &'static str, source: StoreError) -> Self {
        Self::Storage { public, source }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            // Client-facing: report every offending field.
            ServerError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    success: false,
                    message: VALIDATION_FAILURE.to_owned(),
                    errors: e.errors,
                }),
            )
                .into_response(),

            // Internal: log the full detail, answer with the generic text.
            ServerError::Storage { public, source } => {
                error!(error = %source, "message store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        success: false,
                        message: public.to_owned(),
                        errors: Vec::new(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
