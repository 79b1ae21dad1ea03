//! Shared tail of the pick flows: extract → render → serve → copy on click

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use symview_core::{extract_symbols, ClipboardBridge, SymviewConfig};
use symview_server::{PreviewServer, PreviewSession, ServerConfig};
use tracing::warn;

use crate::clipboard::{ConsoleNotifier, SystemClipboard};
use crate::ui;

/// How a pick flow ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Preview was shown and has since been closed
    Completed,
    /// User dismissed a picker or prompt
    Cancelled,
    /// Source had no `<symbol>` fragments; no preview opened
    NoSymbols,
}

pub const NO_SYMBOLS_MESSAGE: &str = "Selected file doesn't have icon symbols";

/// Preview server options shared by `pick` and `pick-url`
#[derive(Args, Debug, Clone, Default)]
pub struct PreviewArgs {
    /// Address for the preview server (default from config: 127.0.0.1:0)
    #[arg(long, short = 'b', value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Print the preview URL without launching a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Extract symbols from `text` and serve the preview until it is closed
pub async fn show_preview(
    source: &str,
    text: &str,
    args: &PreviewArgs,
    config: &SymviewConfig,
) -> Result<FlowOutcome> {
    let symbols = extract_symbols(text);
    if symbols.is_empty() {
        ui::info(NO_SYMBOLS_MESSAGE);
        return Ok(FlowOutcome::NoSymbols);
    }

    let bridge = ClipboardBridge::new(
        Arc::new(SystemClipboard),
        Arc::new(ConsoleNotifier::new(
            config.preview.confirmation,
            config.preview.status_timeout_ms,
        )),
    );
    let session = PreviewSession::new(source, &symbols, bridge);

    let server_config = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.preview.bind),
    };
    let server = PreviewServer::bind(&server_config, session)
        .await
        .with_context(|| format!("Failed to bind preview server on {}", server_config.bind_addr))?;

    let url = server.url();
    println!(
        "Previewing {} symbols from {} at {} (Ctrl+C to close)",
        symbols.len(),
        source,
        url
    );

    if config.preview.open_browser && !args.no_open {
        if let Err(e) = open::that(&url) {
            warn!("Could not launch a browser: {}", e);
        }
    }

    server.run().await.context("Preview server error")?;
    Ok(FlowOutcome::Completed)
}
