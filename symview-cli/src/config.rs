use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use symview_core::SymviewConfig;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with the default settings
    Init(InitArgs),
    /// Show the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

/// Load environment variables from .env files
///
/// The current directory wins over ~/.symview/.env; neither overrides
/// variables that are already set.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
    }

    let env_file = SymviewConfig::config_dir().join(".env");
    if env_file.exists() {
        match dotenvy::from_path(&env_file) {
            Ok(_) => debug!("Loaded .env from {}", env_file.display()),
            Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
        }
    }
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = SymviewConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}. Use --force to overwrite",
            config_path
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&config_path, SymviewConfig::template()?)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    println!("✓ Created config at: {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = SymviewConfig::load()?;

    let toml_str = toml::to_string_pretty(&config)
        .context("Failed to serialize config to TOML")?;

    println!("{}", toml_str);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", SymviewConfig::config_path().display());
    Ok(())
}
