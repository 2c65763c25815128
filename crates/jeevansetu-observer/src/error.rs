//! Error type for the Observer API server.
//!
//! [`ObserverError`] converts into an Axum HTTP response with a JSON
//! body via its [`IntoResponse`](axum::response::IntoResponse)
//! implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the Observer API layer.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// The requested route or resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
