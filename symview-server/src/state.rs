//! Preview session shared across handlers

use std::sync::Arc;

use symview_core::{render_preview, ClipboardBridge, RenderOptions, SymbolFragment};

use crate::routes::{MESSAGE_PATH, STYLESHEET_PATH};

/// One preview panel: the rendered page plus its message channel.
///
/// Lives as long as the server that holds it; nothing is persisted.
#[derive(Clone)]
pub struct PreviewSession {
    inner: Arc<PreviewSessionInner>,
}

struct PreviewSessionInner {
    source: String,
    symbol_count: usize,
    html: String,
    bridge: ClipboardBridge,
}

impl PreviewSession {
    /// Render `symbols` for serving and bind them to `bridge`
    pub fn new(source: impl Into<String>, symbols: &[SymbolFragment], bridge: ClipboardBridge) -> Self {
        let source = source.into();
        let options = RenderOptions::served(&source, STYLESHEET_PATH, MESSAGE_PATH);
        let html = render_preview(symbols, &options);
        Self {
            inner: Arc::new(PreviewSessionInner {
                source,
                symbol_count: symbols.len(),
                html,
                bridge,
            }),
        }
    }

    pub fn source(&self) -> &str {
        &self.inner.source
    }

    pub fn symbol_count(&self) -> usize {
        self.inner.symbol_count
    }

    pub fn html(&self) -> &str {
        &self.inner.html
    }

    pub fn bridge(&self) -> &ClipboardBridge {
        &self.inner.bridge
    }
}
