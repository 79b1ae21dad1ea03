//! `symview list` - print the symbol ids found in a file or URL

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use symview_core::{extract_symbols, SymbolFragment, SymviewConfig};

use super::preview::{FlowOutcome, NO_SYMBOLS_MESSAGE};
use super::source::load_source;
use crate::ui;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// File path or http(s) URL containing <symbol> markup
    pub source: String,

    /// Output as JSON (id, offset and markup per symbol)
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    source: &'a str,
    count: usize,
    symbols: &'a [SymbolFragment],
}

pub async fn run_list(args: ListArgs, config: &SymviewConfig) -> Result<FlowOutcome> {
    let (candidate, text) = load_source(&args.source, config).await?;
    let symbols = extract_symbols(&text);

    if args.json {
        let output = ListOutput {
            source: candidate.as_str(),
            count: symbols.len(),
            symbols: &symbols,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(if symbols.is_empty() {
            FlowOutcome::NoSymbols
        } else {
            FlowOutcome::Completed
        });
    }

    if symbols.is_empty() {
        ui::info(NO_SYMBOLS_MESSAGE);
        return Ok(FlowOutcome::NoSymbols);
    }

    for symbol in &symbols {
        println!("{}", symbol.id().unwrap_or("-"));
    }
    Ok(FlowOutcome::Completed)
}
