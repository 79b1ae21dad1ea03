/// Structured error types for symview-core.
///
/// Library callers get composable errors; the `symview` binary wraps them
/// with `anyhow` context where that reads better.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for symview-core operations
#[derive(Error, Debug)]
pub enum SymbolError {
    /// Workspace root is missing or is not a directory
    #[error("No workspace is opened ({path:?} is not a directory)")]
    NoWorkspace { path: PathBuf },

    /// Directory walk failed at the workspace root
    #[error("Failed to scan workspace {path:?}: {reason}")]
    Walk { path: PathBuf, reason: String },

    /// Source file could not be read as text
    #[error("Failed to read {path:?}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// Remote fetch failed (transport, DNS, non-2xx status)
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// System clipboard rejected the write
    #[error("Clipboard error: {reason}")]
    Clipboard { reason: String },

    /// Configuration file could not be parsed
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for symview-core operations
pub type Result<T> = std::result::Result<T, SymbolError>;

impl SymbolError {
    /// Create a no-workspace error
    pub fn no_workspace(path: impl Into<PathBuf>) -> Self {
        Self::NoWorkspace { path: path.into() }
    }

    /// Create a walk error
    pub fn walk(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Walk {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a read error
    pub fn read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a clipboard error
    pub fn clipboard(reason: impl Into<String>) -> Self {
        Self::Clipboard {
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SymbolError::fetch("https://example.com/icons.svg", "404 Not Found");
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://example.com/icons.svg: 404 Not Found"
        );

        let err = SymbolError::no_workspace("/tmp/missing");
        assert!(err.to_string().starts_with("No workspace is opened"));
        assert!(err.to_string().contains("/tmp/missing"));
    }
}
