//! Players and how they pick moves.

use crate::error::SetupError;
use crate::types::Symbol;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// How a player chooses moves.
///
/// Dispatched once per turn by the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlayerKind {
    /// Positions come from a [`crate::MoveSource`].
    Human,
    /// Positions come from the [`crate::ComputerHeuristic`].
    Computer,
}

/// A validated player name: non-empty after trimming, at most
/// [`MAX_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates and trims a raw name.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, SetupError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(SetupError::InvalidPlayerName {
                reason: "Player name cannot be empty",
            });
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(SetupError::InvalidPlayerName {
                reason: "Player name cannot exceed 20 characters",
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = SetupError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// A participant in the game.
///
/// Identity is the symbol alone: two players with the same symbol are
/// equal regardless of name or kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    symbol: Symbol,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player from already-validated parts.
    pub fn new(name: PlayerName, symbol: Symbol, kind: PlayerKind) -> Self {
        Self { name, symbol, kind }
    }

    /// Creates a player from raw parts, validating name and symbol.
    #[instrument]
    pub fn try_new(name: &str, symbol: char, kind: PlayerKind) -> Result<Self, SetupError> {
        Ok(Self::new(PlayerName::parse(name)?, Symbol::new(symbol)?, kind))
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the player's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns how this player picks moves.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Checks if this player is computer-controlled.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Player {}

impl std::hash::Hash for Player {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
