//! Source locator: workspace candidates and local reads
//!
//! Walks the workspace root and offers every file outside the excluded
//! directories as a forward-slash relative path. Remote candidates are plain
//! URL strings handled by [`crate::remote`].

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::LocatorConfig;
use crate::error::{Result, SymbolError};

/// A selectable source: a workspace-relative path or an absolute URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Local(String),
    Remote(String),
}

impl Candidate {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local(path) => path,
            Self::Remote(url) => url,
        }
    }

    /// Classify a user-supplied source string by its scheme
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(trimmed.to_string())
        } else {
            Self::Local(trimmed.to_string())
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters applied while walking the workspace
#[derive(Debug, Clone, Default)]
pub struct LocatorOptions {
    pub exclude: Vec<String>,
    pub extensions: Vec<String>,
}

impl From<&LocatorConfig> for LocatorOptions {
    fn from(config: &LocatorConfig) -> Self {
        Self {
            exclude: config.exclude.clone(),
            extensions: config.extensions.clone(),
        }
    }
}

impl LocatorOptions {
    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .exclude
                .iter()
                .any(|name| entry.file_name() == OsStr::new(name))
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Check that the workspace root exists and is a directory
pub fn resolve_workspace(root: &Path) -> Result<PathBuf> {
    if root.is_dir() {
        Ok(root.to_path_buf())
    } else {
        Err(SymbolError::no_workspace(root))
    }
}

/// List every candidate file under `root`, relative to it, in walk order
///
/// Directories named in `options.exclude` are pruned (never descended into).
/// Symlinks are not followed. Entries that cannot be read are skipped.
pub fn list_candidates(root: &Path, options: &LocatorOptions) -> Result<Vec<String>> {
    let root = resolve_workspace(root)?;
    let mut files = Vec::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !options.is_excluded_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(SymbolError::walk(&root, err.to_string()));
            }
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() || !options.accepts_extension(entry.path()) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(&root) {
            files.push(to_slash(relative));
        }
    }

    debug!("Found {} candidate files under {}", files.len(), root.display());
    Ok(files)
}

/// Read a selected local candidate as text
///
/// Invalid UTF-8 is replaced rather than rejected; symbol markup is ASCII.
pub fn read_local(root: &Path, relative: &str) -> Result<String> {
    let path = root.join(relative);
    let bytes = fs::read(&path).map_err(|e| SymbolError::read(&path, e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
