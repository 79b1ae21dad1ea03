//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::PreviewSession;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub source: String,
    pub symbols: usize,
}

/// GET /health
async fn health(State(session): State<PreviewSession>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        source: session.source().to_string(),
        symbols: session.symbol_count(),
    })
}

/// Health routes
pub fn router() -> Router<PreviewSession> {
    Router::new().route("/health", get(health))
}
