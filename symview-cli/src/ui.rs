//! Unified UI helpers for the symview CLI
//!
//! # Quiet Mode
//!
//! Spinners and transient status lines are suppressed when:
//! - `--quiet` flag is passed
//! - `SYMVIEW_QUIET=1` environment variable is set
//! - stderr is not a TTY (piped output)
//!
//! One-line notices (`info`, `error`) are still printed in quiet mode;
//! they are the tool's only user-facing messages.

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Global quiet mode state
static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize quiet mode from flags and environment
///
/// Call this once at startup with the --quiet flag value.
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("SYMVIEW_QUIET").map(|v| v == "1").unwrap_or(false)
        || !std::io::stderr().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

/// Check if we're in quiet mode
pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

fn plain_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Create a spinner that respects quiet mode
pub fn spinner(msg: impl Into<String>) -> Option<ProgressBar> {
    if is_quiet() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Clear a spinner without leaving a line behind.
///
/// Used on failure too: errors are reported once, by `main`.
pub fn finish_clear(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Persistent informational line
pub fn info(msg: impl AsRef<str>) {
    eprintln!("ℹ {}", msg.as_ref());
}

/// Persistent one-line error
pub fn error(msg: impl AsRef<str>) {
    eprintln!("✗ {}", msg.as_ref());
}

/// Show a status line that disappears after `timeout`
///
/// Falls back to a plain line in quiet mode or outside a tokio runtime.
pub fn flash_status(msg: impl Into<String>, timeout: Duration) {
    let msg = msg.into();
    let handle = match tokio::runtime::Handle::try_current() {
        Ok(handle) if !is_quiet() => handle,
        _ => {
            println!("{}", msg);
            return;
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(plain_style());
    pb.set_message(format!("✓ {}", msg));
    pb.tick();
    handle.spawn(async move {
        tokio::time::sleep(timeout).await;
        pb.finish_and_clear();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_clear_accepts_none() {
        // Quiet mode hands out no spinner
        finish_clear(None);
    }

    #[test]
    fn finish_clear_leaves_no_message() {
        let pb = ProgressBar::hidden();
        pb.set_message("Fetching https://example.com/icons.svg");
        finish_clear(Some(pb.clone()));
        assert!(pb.is_finished());
    }

    #[test]
    fn flash_status_without_runtime_prints() {
        flash_status("copied", Duration::from_millis(1));
    }
}
