//! Interactive pickers (the "quick-pick" and "input box" of the preview flow)
//!
//! Dismissing a prompt (Esc or Ctrl+C) returns `Ok(None)`: abandoning a pick
//! is a normal exit, not an error.

use anyhow::{anyhow, Context, Result};
use inquire::{InquireError, Select, Text};

/// Map inquire's cancel/interrupt into `None`
fn cancellable<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(InquireError::NotTTY) => Err(anyhow!(
            "an interactive terminal is required (use `symview list` or `symview render` in scripts)"
        )),
        Err(e) => Err(anyhow!(e)),
    }
}

/// Let the user choose one workspace file
pub async fn pick_file(candidates: Vec<String>) -> Result<Option<String>> {
    tokio::task::spawn_blocking(move || {
        cancellable(
            Select::new("Select a file", candidates)
                .with_help_message("↑↓ to move, type to filter, Enter to preview, Esc to cancel")
                .with_page_size(15)
                .prompt(),
        )
    })
    .await
    .context("File picker task failed")?
}

/// Ask for a remote URL; empty input counts as cancelled
pub async fn prompt_url() -> Result<Option<String>> {
    let answer = tokio::task::spawn_blocking(|| {
        cancellable(
            Text::new("Icon symbol URL:")
                .with_placeholder("https://at.alicdn.com/t/font_xxx.js")
                .with_help_message("The file is fetched once with a plain GET")
                .prompt(),
        )
    })
    .await
    .context("URL prompt task failed")??;

    Ok(non_empty(answer))
}

pub fn non_empty(answer: Option<String>) -> Option<String> {
    answer
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_and_interrupt_are_none() {
        let cancelled: Result<Option<String>> = cancellable(Err(InquireError::OperationCanceled));
        assert!(cancelled.unwrap().is_none());

        let interrupted: Result<Option<String>> =
            cancellable(Err(InquireError::OperationInterrupted));
        assert!(interrupted.unwrap().is_none());
    }

    #[test]
    fn not_tty_is_error() {
        let result: Result<Option<String>> = cancellable(Err(InquireError::NotTTY));
        assert!(result.is_err());
    }

    #[test]
    fn empty_url_is_cancel() {
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(
            non_empty(Some(" https://x/y.svg ".to_string())),
            Some("https://x/y.svg".to_string())
        );
    }
}
