//! Route handlers organized by resource

pub mod assets;
pub mod health;
pub mod message;
pub mod preview;

use axum::Router;

use crate::state::PreviewSession;

/// Panel → host message channel
pub const MESSAGE_PATH: &str = "/api/message";

/// Bundled stylesheet linked by the preview page
pub const STYLESHEET_PATH: &str = "/static/index.css";

/// All preview routes, bound to one session
pub fn router(session: PreviewSession) -> Router {
    Router::new()
        .merge(health::router())
        .merge(preview::router())
        .merge(assets::router())
        .merge(message::router())
        .with_state(session)
}
