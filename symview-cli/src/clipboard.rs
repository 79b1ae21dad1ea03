//! System clipboard and console confirmation for the clipboard bridge

use std::time::Duration;

use symview_core::{ClipboardSink, ConfirmationStyle, Notifier, SymbolError};

use crate::ui;

/// Writes to the OS clipboard via `cli-clipboard`
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> symview_core::Result<()> {
        cli_clipboard::set_contents(text.to_owned()).map_err(|e| SymbolError::clipboard(e.to_string()))
    }
}

/// Prints copy confirmations to the terminal
pub struct ConsoleNotifier {
    style: ConfirmationStyle,
    timeout: Duration,
}

impl ConsoleNotifier {
    pub fn new(style: ConfirmationStyle, timeout_ms: u64) -> Self {
        Self {
            style,
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn confirm(&self, message: &str) {
        match self.style {
            ConfirmationStyle::Info => ui::info(message),
            ConfirmationStyle::Status => ui::flash_status(message, self.timeout),
        }
    }
}
