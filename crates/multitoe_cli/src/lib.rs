//! Multitoe terminal session.
//!
//! Wraps the [`multitoe`] engine in the prompts and round loop needed to
//! play it from a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Prompter**: line-oriented questions over any reader/writer; also the
//!   [`multitoe::MoveSource`] for human players
//! - **Session**: setup, rounds, result banners, and "play again"

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod prompt;
mod session;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Overrides, PlayerConfig, SessionConfig};

// Crate-level exports - Terminal I/O
pub use prompt::{PromptError, Prompter};
pub use session::Session;
