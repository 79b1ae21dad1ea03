//! Remote source fetch
//!
//! One GET per invocation, no auth, no retry. Transport failures, DNS errors
//! and non-2xx statuses all collapse into [`SymbolError::Fetch`].

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::RemoteConfig;
use crate::error::{Result, SymbolError};

/// Build the HTTP client used for remote sources
pub fn build_client(config: &RemoteConfig) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("symview/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| SymbolError::fetch("", format!("failed to build HTTP client: {}", e)))
}

/// Fetch the body of `url` as text
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(SymbolError::fetch(url, "empty URL"));
    }

    info!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SymbolError::fetch(url, e.to_string()))?;

    let status = response.status();
    debug!("{} -> {}", url, status);

    let response = response
        .error_for_status()
        .map_err(|_| SymbolError::fetch(url, format!("HTTP {}", status)))?;

    response
        .text()
        .await
        .map_err(|e| SymbolError::fetch(url, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    async fn spawn_fixture() -> SocketAddr {
        let app = Router::new().route(
            "/icons.svg",
            get(|| async { r#"<svg><symbol id="home"></symbol></svg>"# }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client() -> Client {
        build_client(&RemoteConfig { timeout_secs: 5 }).unwrap()
    }

    #[tokio::test]
    async fn fetches_body_text() {
        let addr = spawn_fixture().await;
        let body = fetch_text(&client(), &format!("http://{}/icons.svg", addr))
            .await
            .unwrap();
        assert_eq!(body, r#"<svg><symbol id="home"></symbol></svg>"#);
    }

    #[tokio::test]
    async fn not_found_is_single_fetch_error() {
        let addr = spawn_fixture().await;
        let err = fetch_text(&client(), &format!("http://{}/missing.svg", addr))
            .await
            .unwrap_err();

        match err {
            SymbolError::Fetch { reason, .. } => assert!(reason.contains("404")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_text(&client(), &format!("http://{}/icons.svg", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, SymbolError::Fetch { .. }));
    }

    #[tokio::test]
    async fn malformed_and_empty_urls_are_fetch_errors() {
        for url in ["not a url", "   "] {
            let err = fetch_text(&client(), url).await.unwrap_err();
            assert!(matches!(err, SymbolError::Fetch { .. }));
        }
    }
}
