//! Clipboard bridge: panel → host messages
//!
//! The preview posts `{"command": "copyToClipboard", "text": "<id>"}`. The
//! bridge writes `text` to the clipboard and raises one confirmation. Any other
//! message shape is ignored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Destination for copied ids (the system clipboard in the binary)
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Surface for the transient "copied" confirmation
pub trait Notifier: Send + Sync {
    fn confirm(&self, message: &str);
}

/// Messages the preview panel can send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelMessage {
    CopyToClipboard { text: String },
}

/// What the bridge did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeOutcome {
    Copied(String),
    Ignored,
    Failed(String),
}

pub fn confirmation_message(id: &str) -> String {
    format!("Symbol ID: '{}' has been copied to Clipboard!", id)
}

#[derive(Clone)]
pub struct ClipboardBridge {
    clipboard: Arc<dyn ClipboardSink>,
    notifier: Arc<dyn Notifier>,
}

impl ClipboardBridge {
    pub fn new(clipboard: Arc<dyn ClipboardSink>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Handle a raw JSON message from the panel
    pub fn handle_value(&self, value: Value) -> BridgeOutcome {
        match serde_json::from_value::<PanelMessage>(value) {
            Ok(message) => self.handle(message),
            Err(e) => {
                debug!("Ignoring panel message: {}", e);
                BridgeOutcome::Ignored
            }
        }
    }

    pub fn handle(&self, message: PanelMessage) -> BridgeOutcome {
        match message {
            PanelMessage::CopyToClipboard { text } => match self.clipboard.write_text(&text) {
                Ok(()) => {
                    info!(id = %text, "Copied symbol id");
                    self.notifier.confirm(&confirmation_message(&text));
                    BridgeOutcome::Copied(text)
                }
                Err(e) => {
                    warn!("Clipboard write failed: {}", e);
                    BridgeOutcome::Failed(e.to_string())
                }
            },
        }
    }
}
