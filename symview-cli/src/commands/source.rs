use std::path::Path;

use anyhow::Result;
use symview_core::{build_client, fetch_text, read_local, Candidate, SymviewConfig};

use crate::ui;

/// Read a path (relative to the current directory) or fetch a URL
pub async fn load_source(source: &str, config: &SymviewConfig) -> Result<(Candidate, String)> {
    let candidate = Candidate::parse(source);
    let text = match &candidate {
        Candidate::Local(path) => read_local(Path::new("."), path)?,
        Candidate::Remote(url) => fetch_remote(url, config).await?,
    };
    Ok((candidate, text))
}

/// GET `url` behind a spinner.
///
/// The spinner is cleared on failure; the caller's error line is the only
/// message the user sees.
pub async fn fetch_remote(url: &str, config: &SymviewConfig) -> Result<String> {
    let client = build_client(&config.remote)?;
    let pb = ui::spinner(format!("Fetching {}", url));
    let result = fetch_text(&client, url).await;
    ui::finish_clear(pb);
    Ok(result?)
}
