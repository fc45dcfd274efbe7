//! Typed HTTP client for the contact API.

use frontdesk_core::NewContactMessage;
use frontdesk_core::api::{ErrorResponse, MessageResponse, SubmitResponse};
use frontdesk_core::error::FieldError;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// What the server made of a submission that produced a well-formed answer.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Stored; `id` identifies the new record.
    Accepted { message: String, id: String },
    /// Rejected by server-side validation; resubmit with corrected fields.
    Rejected {
        message: String,
        errors: Vec<FieldError>,
    },
}

/// Failures for which no corrected resubmission can help right now.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, …).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure envelope (5xx, auth, …).
    #[error("server failure: {0}")]
    Server(String),
}

/// Client for the contact endpoints of a frontdesk-server instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` without a trailing slash, e.g. `"http://127.0.0.1:3000"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit a contact message via `POST /api/contact`.
    ///
    /// A 400 comes back as [`SubmitOutcome::Rejected`] so the form can show
    /// the per-field reasons; everything else non-2xx is a [`ClientError`].
    pub async fn submit(
        &self,
        submission: &NewContactMessage,
    ) -> Result<SubmitOutcome, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/contact", self.base_url))
            .json(submission)
            .send()
            .await?;
        let status = response.status();
        debug!(status = status.as_u16(), "contact submission answered");

        if status.is_success() {
            let body: SubmitResponse = response.json().await?;
            return Ok(SubmitOutcome::Accepted {
                message: body.message,
                id: body.id,
            });
        }

        match response.json::<ErrorResponse>().await {
            Ok(body) if status == StatusCode::BAD_REQUEST => Ok(SubmitOutcome::Rejected {
                message: body.message,
                errors: body.errors,
            }),
            Ok(body) => Err(ClientError::Server(body.message)),
            Err(_) => Err(ClientError::Server(format!(
                "unexpected response from server ({status})"
            ))),
        }
    }

    /// Fetch every stored message via `GET /api/contact-messages`.
    pub async fn list_messages(&self) -> Result<Vec<MessageResponse>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/contact-messages", self.base_url))
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(ClientError::Server(body.message)),
            Err(_) => Err(ClientError::Server(format!(
                "unexpected response from server ({status})"
            ))),
        }
    }
}
