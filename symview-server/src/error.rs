//! Server and API error types
//!
//! API errors become JSON responses with a matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors starting or running the preview server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Unknown static asset (404)
    NotFound { resource: &'static str, id: String },

    /// Message from a foreign origin (403)
    Forbidden { message: String },

    /// Clipboard write failed (500, logged)
    Clipboard { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Forbidden { message } => {
                tracing::warn!("{}", message);
                (
                    StatusCode::FORBIDDEN,
                    json!({
                        "error": "forbidden",
                        "message": message
                    }),
                )
            }
            Self::Clipboard { message } => {
                tracing::error!("Clipboard error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "clipboard_error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
