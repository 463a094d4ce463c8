//! duedate library root.
//! Exposes the due date engine, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Batch { .. } => cli::commands::batch::handle(&cli.command, cfg),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the -v flags.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "duedate=debug",
        _ => "duedate=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests in the same process) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config file to use: `--config` (with `~` expanded) or the standard location.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let cfg_path = config_path(&cli);
    let mut cfg = if matches!(cli.command, Commands::Init { .. }) {
        Config::default()
    } else {
        Config::load_from(&cfg_path)?
    };

    // 3️⃣ command-line calendar overrides
    if let Some(start) = cli.start_hour {
        cfg.work_start_hour = start;
    }
    if let Some(end) = cli.end_hour {
        cfg.work_end_hour = end;
    }
    cfg.calendar()?;

    tracing::debug!(config = %cfg_path.display(), ?cfg, "configuration loaded");

    // 4️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
