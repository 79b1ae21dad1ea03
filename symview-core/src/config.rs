//! TOML configuration for symview (`~/.symview/config.toml`)
//!
//! Every field has a default, so a missing file or a partial file both load
//! cleanly. Only a file that exists but fails to parse is an error.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SymbolError};

/// Directories skipped by the workspace walk unless configured otherwise
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "node_modules", ".angular"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SymviewConfig {
    #[serde(default)]
    pub locator: LocatorConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocatorConfig {
    /// Directory names never descended into
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// File extensions offered for selection (empty = every file)
    #[serde(default)]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    /// Request timeout for remote fetches
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Address the preview server binds to (port 0 picks a free port)
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// Launch the system browser once the preview is ready
    #[serde(default = "default_true")]
    pub open_browser: bool,

    #[serde(default)]
    pub confirmation: ConfirmationStyle,

    /// How long a status-line confirmation stays visible
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,
}

/// How a successful copy is acknowledged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStyle {
    /// Short-lived status line
    #[default]
    Status,
    /// Persistent info message
    Info,
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

fn default_true() -> bool {
    true
}

fn default_status_timeout_ms() -> u64 {
    2000
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            exclude: default_excludes(),
            extensions: Vec::new(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            open_browser: true,
            confirmation: ConfirmationStyle::default(),
            status_timeout_ms: default_status_timeout_ms(),
        }
    }
}

impl SymviewConfig {
    /// Load config from ~/.symview/config.toml, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SymbolError::config(format!("failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| SymbolError::config(format!("invalid TOML in {}: {}", path.display(), e)))
    }

    /// Get config directory: ~/.symview
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".symview")
    }

    /// Get config file path: ~/.symview/config.toml
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Render the defaults as a commented TOML document for `config init`
    pub fn template() -> Result<String> {
        let body = toml::to_string_pretty(&Self::default())
            .map_err(|e| SymbolError::config(format!("failed to serialize defaults: {}", e)))?;
        Ok(format!(
            "# symview configuration\n# confirmation: \"status\" (transient) or \"info\" (persistent)\n\n{}",
            body
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SymviewConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, SymviewConfig::default());
        assert_eq!(config.locator.exclude, vec![".git", "node_modules", ".angular"]);
        assert_eq!(config.preview.status_timeout_ms, 2000);
        assert_eq!(config.preview.bind.port(), 0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[preview]\nconfirmation = \"info\"\nopen_browser = false\n\n[locator]\nextensions = [\"svg\", \"html\"]\n",
        )
        .unwrap();

        let config = SymviewConfig::load_from(&path).unwrap();
        assert_eq!(config.preview.confirmation, ConfirmationStyle::Info);
        assert!(!config.preview.open_browser);
        assert_eq!(config.locator.extensions, vec!["svg", "html"]);
        assert_eq!(config.locator.exclude.len(), 3);
        assert_eq!(config.remote.timeout_secs, 30);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[preview\nbind = ").unwrap();

        let err = SymviewConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, SymbolError::Config { .. }));
    }

    #[test]
    fn template_parses_back_to_defaults() {
        let template = SymviewConfig::template().unwrap();
        let parsed: SymviewConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed, SymviewConfig::default());
    }
}
