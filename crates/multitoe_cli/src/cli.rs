//! Command-line interface for multitoe.

use crate::config::Overrides;
use clap::Parser;
use std::path::PathBuf;

/// Multitoe - N×N tic-tac-toe for any number of human or computer players
#[derive(Parser, Debug)]
#[command(name = "multitoe")]
#[command(about = "N×N tic-tac-toe for humans and computers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./multitoe.toml if present)
    #[arg(short, long, env = "MULTITOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Board size, skipping the prompt
    #[arg(short, long, env = "MULTITOE_BOARD_SIZE")]
    pub board_size: Option<usize>,

    /// Seed for computer players
    #[arg(long, env = "MULTITOE_SEED")]
    pub seed: Option<u64>,

    /// Pause before each computer move, in milliseconds (0 disables)
    #[arg(long, env = "MULTITOE_THINK_DELAY_MS")]
    pub think_delay_ms: Option<u64>,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Returns the flags that override config file values.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            think_delay_ms: self.think_delay_ms,
            seed: self.seed,
            board_size: self.board_size,
        }
    }
}
