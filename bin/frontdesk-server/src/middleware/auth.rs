//! Optional bearer-token check for the admin listing route.
//!
//! Enforced only when `FRONTDESK_ADMIN_TOKEN` is configured; with no token
//! the route stays open, matching the site's original deployment.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use frontdesk_core::api::ErrorResponse;

use crate::config::Config;

pub async fn check_admin_auth(
    State(config): State<Arc<Config>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(expected_token) = &config.admin_token {
        let provided = req
            .headers()
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match provided {
            Some(token) if token == expected_token => {}
            _ => {
                return (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(ErrorResponse {
                        success: false,
                        message: "unauthorised".to_owned(),
                        errors: Vec::new(),
                    }),
                )
                    .into_response();
            }
        }
    }
    next.run(req).await
}
