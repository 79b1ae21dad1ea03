//! Axum preview server
//!
//! - Binds to localhost (ephemeral port by default)
//! - Request tracing
//! - Graceful shutdown on Ctrl+C / SIGTERM, which closes the panel

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::routes;
use crate::state::PreviewSession;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:0, any free port)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }
}

/// Build the router for a session, with tracing middleware
pub fn build_router(session: PreviewSession) -> Router {
    routes::router(session).layer(TraceLayer::new_for_http())
}

/// A bound, not yet running, preview server.
///
/// Binding first lets the caller learn the real port (and open the browser)
/// before the serve loop starts.
pub struct PreviewServer {
    listener: TcpListener,
    app: Router,
    addr: SocketAddr,
}

impl PreviewServer {
    pub async fn bind(config: &ServerConfig, session: PreviewSession) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.bind_addr).await?;
        let addr = listener.local_addr()?;
        tracing::debug!(
            source = %session.source(),
            symbols = session.symbol_count(),
            "Preview session bound to {}",
            addr
        );
        Ok(Self {
            listener,
            app: build_router(session),
            addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL of the preview page
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `signal` resolves
    pub async fn run_until<F>(self, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Preview listening on {}", self.addr);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("Preview closed");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, closing preview");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, closing preview");
        }
    }
}
