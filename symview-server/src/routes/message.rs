//! Panel → host message channel
//!
//! Only `application/json` bodies are accepted, so a page on another origin
//! cannot reach the clipboard without a CORS preflight (which this server
//! never answers). Requests carrying a foreign `Origin` are refused outright.
//! JSON that is not a known message is ignored with 204.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use symview_core::BridgeOutcome;

use crate::error::ApiError;
use crate::routes::MESSAGE_PATH;
use crate::state::PreviewSession;

/// POST /api/message
async fn message(
    State(session): State<PreviewSession>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    check_origin(&headers)?;

    let value = match body {
        Ok(Json(value)) => value,
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            tracing::debug!("Rejecting panel message: {}", rejection);
            return Ok(rejection.into_response());
        }
        Err(e) => {
            tracing::debug!("Ignoring malformed panel message: {}", e);
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
    };

    // The system clipboard blocks on the display server
    let outcome = tokio::task::spawn_blocking(move || session.bridge().handle_value(value))
        .await
        .map_err(|e| ApiError::Clipboard {
            message: format!("clipboard task failed: {}", e),
        })?;

    match outcome {
        BridgeOutcome::Copied(text) => Ok(Json(json!({ "copied": text })).into_response()),
        BridgeOutcome::Ignored => Ok(StatusCode::NO_CONTENT.into_response()),
        BridgeOutcome::Failed(message) => Err(ApiError::Clipboard { message }),
    }
}

/// A present `Origin` must be this server's own `http://<Host>`
fn check_origin(headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(origin) = headers.get(header::ORIGIN) else {
        return Ok(());
    };
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let same_origin = match (origin.to_str(), host) {
        (Ok(origin), Some(host)) => origin == format!("http://{}", host),
        _ => false,
    };

    if same_origin {
        Ok(())
    } else {
        Err(ApiError::Forbidden {
            message: format!("cross-origin message from {:?} refused", origin),
        })
    }
}

pub fn router() -> Router<PreviewSession> {
    Router::new().route(MESSAGE_PATH, post(message))
}
