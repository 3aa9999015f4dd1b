//! Session configuration.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, then
//! command-line flags (which may themselves come from the environment).

use derive_getters::Getters;
use derive_more::{Display, Error};
use multitoe::{Player, PlayerKind, PlayerName, Symbol};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file looked for in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "multitoe.toml";

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Pause before a computer move is shown, in milliseconds. 0 disables it.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Seed for computer players; random when unset.
    #[serde(default)]
    seed: Option<u64>,

    /// Board size; prompted for when unset.
    #[serde(default)]
    board_size: Option<usize>,

    /// Preconfigured players; prompted for when empty.
    #[serde(default)]
    players: Vec<PlayerConfig>,
}

/// A player entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    /// Display name (validated on load).
    name: PlayerName,
    /// Single-character symbol (validated on load).
    symbol: Symbol,
    /// Human or computer.
    #[serde(default = "default_kind")]
    kind: PlayerKind,
}

impl PlayerConfig {
    /// Builds the engine player.
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.symbol, self.kind)
    }
}

/// Values from the command line that override the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Overrides `think_delay_ms`.
    pub think_delay_ms: Option<u64>,
    /// Overrides `seed`.
    pub seed: Option<u64>,
    /// Overrides `board_size`.
    pub board_size: Option<usize>,
}

fn default_think_delay_ms() -> u64 {
    500
}

fn default_kind() -> PlayerKind {
    PlayerKind::Human
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            seed: None,
            board_size: None,
            players: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            players = config.players.len(),
            board_size = ?config.board_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the explicit file if given, else [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument(skip(explicit))]
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(delay) = overrides.think_delay_ms {
            self.think_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.board_size.is_some() {
            self.board_size = overrides.board_size;
        }
        self
    }

    /// Builds engine players from the configured entries.
    pub fn to_players(&self) -> Vec<Player> {
        self.players.iter().map(PlayerConfig::to_player).collect()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
