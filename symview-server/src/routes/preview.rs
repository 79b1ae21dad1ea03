use axum::{extract::State, response::Html, routing::get, Router};

use crate::state::PreviewSession;

/// GET / - the rendered preview page
async fn index(State(session): State<PreviewSession>) -> Html<String> {
    Html(session.html().to_string())
}

pub fn router() -> Router<PreviewSession> {
    Router::new().route("/", get(index))
}
