//! Multitoe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use multitoe_cli::{Cli, Prompter, Session, SessionConfig};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = SessionConfig::discover(cli.config.as_deref())?.with_overrides(cli.overrides());
    info!(?config, "Starting multitoe");

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    Session::new(prompter, config).run()
}

/// Logs go to stderr or a file so they never interleave with prompts.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = match &cli.log_level {
        Some(directive) => EnvFilter::try_new(directive).context("Invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    match &cli.log_file {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
