//! First-class move type.
//!
//! A move is a player's intent to mark a position. It can be validated
//! independently of being applied.

use crate::types::{Position, Symbol};
use serde::{Deserialize, Serialize};

/// A player placing their symbol at a position.
///
/// Players are identified by their symbol, so that is all a move records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Symbol of the player making the move.
    pub player: Symbol,
    /// Where the symbol goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}
