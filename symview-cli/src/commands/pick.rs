//! `symview pick` and `symview pick-url`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use symview_core::{list_candidates, read_local, resolve_workspace, LocatorOptions, SymviewConfig};
use tracing::debug;

use super::preview::{show_preview, FlowOutcome, PreviewArgs};
use super::source::fetch_remote;
use crate::{prompt, ui};

#[derive(Parser, Debug)]
pub struct PickArgs {
    /// Workspace root to scan (default: current directory)
    #[arg(long, short = 'w', env = "SYMVIEW_WORKSPACE", value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Extra directory names to skip (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub preview: PreviewArgs,
}

#[derive(Parser, Debug)]
pub struct PickUrlArgs {
    /// URL to fetch instead of prompting for one
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub preview: PreviewArgs,
}

/// Pick a local icon-symbol file from the workspace
pub async fn run_pick(args: PickArgs, config: &SymviewConfig) -> Result<FlowOutcome> {
    let root = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let root = resolve_workspace(&root)?;

    let mut options = LocatorOptions::from(&config.locator);
    options.exclude.extend(args.exclude);

    let pb = ui::spinner(format!("Scanning {}", root.display()));
    let walk_root = root.clone();
    let scan = tokio::task::spawn_blocking(move || list_candidates(&walk_root, &options)).await;
    ui::finish_clear(pb);
    let files = scan.context("Workspace scan task failed")??;

    if files.is_empty() {
        bail!("No files found in workspace {}", root.display());
    }

    let Some(file) = prompt::pick_file(files).await? else {
        debug!("File selection dismissed");
        return Ok(FlowOutcome::Cancelled);
    };

    let text = read_local(&root, &file)?;
    show_preview(&file, &text, &args.preview, config).await
}

/// Pick a remote icon-symbol URL
pub async fn run_pick_url(args: PickUrlArgs, config: &SymviewConfig) -> Result<FlowOutcome> {
    let url = match prompt::non_empty(args.url) {
        Some(url) => url,
        None => match prompt::prompt_url().await? {
            Some(url) => url,
            None => {
                debug!("URL prompt dismissed");
                return Ok(FlowOutcome::Cancelled);
            }
        },
    };

    let text = fetch_remote(&url, config).await?;
    show_preview(&url, &text, &args.preview, config).await
}
