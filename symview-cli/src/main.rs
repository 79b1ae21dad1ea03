//! symview CLI - icon symbol previewer
//!
//! Pick a local file or a URL containing inline `<symbol id="...">` markup,
//! preview every symbol as a clickable grid in the browser, and copy the
//! clicked symbol's id to the clipboard.
//!
//! - `pick` / `pick-url`: interactive flows with a live preview server
//! - `list`: print the ids found in a file or URL
//! - `render`: export a standalone preview page
//! - `config`: manage ~/.symview/config.toml

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use symview_core::SymviewConfig;

mod clipboard;
mod commands;
mod config;
mod prompt;
mod tracing_setup;
mod ui;

use commands::FlowOutcome;

#[derive(Parser, Debug)]
#[command(
    name = "symview",
    author,
    version,
    about = "Preview inline SVG <symbol> icons and copy their ids",
    long_about = "Scan a workspace or fetch a URL for <symbol id=\"...\"> definitions, \
                  render them as a clickable grid in the browser, and copy the clicked \
                  icon's id to the clipboard."
)]
struct Cli {
    /// Suppress spinners and transient status lines
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick a local icon-symbol file from the workspace and preview it
    Pick(commands::pick::PickArgs),
    /// Pick a remote icon-symbol URL and preview it
    PickUrl(commands::pick::PickUrlArgs),
    /// Print the symbol ids found in a file or URL
    List(commands::list::ListArgs),
    /// Write a standalone preview page for a file or URL
    Render(commands::render::RenderArgs),
    /// Manage symview configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() {
    // Before parsing, so .env can supply SYMVIEW_WORKSPACE
    config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    ui::init_quiet_mode(cli.quiet);

    match run(cli.command).await {
        Ok(outcome) => tracing::debug!(?outcome, "Done"),
        Err(e) => {
            ui::error(format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

async fn run(command: Commands) -> Result<FlowOutcome> {
    match command {
        Commands::Config(args) => {
            config::run_config(args)?;
            Ok(FlowOutcome::Completed)
        }
        Commands::Completions(args) => {
            run_completions(args);
            Ok(FlowOutcome::Completed)
        }
        Commands::Pick(args) => commands::run_pick(args, &SymviewConfig::load()?).await,
        Commands::PickUrl(args) => commands::run_pick_url(args, &SymviewConfig::load()?).await,
        Commands::List(args) => commands::run_list(args, &SymviewConfig::load()?).await,
        Commands::Render(args) => commands::run_render(args, &SymviewConfig::load()?).await,
    }
}

fn run_completions(args: CompletionsArgs) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
