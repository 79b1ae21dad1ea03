//! `symview render` - write a standalone preview document
//!
//! The exported page inlines its stylesheet and copies ids with the browser's
//! own clipboard API, so it works when opened straight from disk.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use symview_core::{extract_symbols, render_preview, RenderOptions, SymviewConfig};
use tracing::warn;

use super::preview::{FlowOutcome, NO_SYMBOLS_MESSAGE};
use super::source::load_source;
use crate::ui;

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// File path or http(s) URL containing <symbol> markup
    pub source: String,

    /// Output HTML file
    #[arg(long = "out", short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Open the written file in the browser
    #[arg(long)]
    pub open: bool,
}

pub async fn run_render(args: RenderArgs, config: &SymviewConfig) -> Result<FlowOutcome> {
    let (candidate, text) = load_source(&args.source, config).await?;
    let symbols = extract_symbols(&text);

    if symbols.is_empty() {
        ui::info(NO_SYMBOLS_MESSAGE);
        return Ok(FlowOutcome::NoSymbols);
    }

    let html = render_preview(&symbols, &RenderOptions::standalone(candidate.as_str()));
    std::fs::write(&args.output, html)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "✓ Wrote {} symbols to {}",
        symbols.len(),
        args.output.display()
    );

    if args.open {
        if let Err(e) = open::that(&args.output) {
            warn!("Could not launch a browser: {}", e);
        }
    }
    Ok(FlowOutcome::Completed)
}
