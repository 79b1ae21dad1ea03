//! Bundled static resources (`/static/{name}`)

use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use symview_core::render::STYLESHEET;

use crate::error::ApiError;
use crate::state::PreviewSession;

/// GET /static/{name}
async fn asset(Path(name): Path<String>) -> Result<impl IntoResponse, ApiError> {
    match name.as_str() {
        "index.css" => Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)),
        _ => Err(ApiError::NotFound {
            resource: "asset",
            id: name,
        }),
    }
}

pub fn router() -> Router<PreviewSession> {
    Router::new().route("/static/{name}", get(asset))
}
