//! rWorktime library root.
//! Exposes the break-rule engine, CLI parser, and high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
    }
}

/// Install the stderr log subscriber. RUST_LOG wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when embedded; keep that one.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(error = %e, "log subscriber already installed");
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(custom) => expand_tilde(custom),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&config_path)?;

    init_tracing(&cfg.log_level);
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
