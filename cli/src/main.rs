//! saveswap CLI: byte-swap and pad Nintendo 64 save dumps

mod cli_args;
mod commands;
mod error;

use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli_args::Cli;
use error::CliExitCode;

/// Logs to stderr at `level`, unless RUST_LOG says otherwise.
fn init_logging(level: LevelFilter) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level()) {
        eprintln!("{e:#}");
        return CliExitCode::Failure.into();
    }

    commands::run(&cli).into()
}
