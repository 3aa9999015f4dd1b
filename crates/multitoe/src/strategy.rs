//! Where human moves come from.
//!
//! The engine never reads input itself. When a human player is up it asks a
//! [`MoveSource`] for a candidate position and validates the answer; a
//! rejected answer is returned to the caller, who asks again.

use crate::board::Board;
use crate::player::Player;
use crate::types::Position;
use derive_more::{Display, Error};
use std::collections::VecDeque;
use tracing::debug;

/// Provider of candidate positions for human players.
pub trait MoveSource {
    /// Error when no position can be produced at all (closed input, etc).
    type Error;

    /// Asks for `player`'s next position on `board`.
    ///
    /// The answer is not trusted; the engine validates it.
    fn request_move(&mut self, player: &Player, board: &Board) -> Result<Position, Self::Error>;
}

/// The script ran out of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No scripted moves left")]
pub struct ScriptExhausted;

/// Source that replays a fixed list of positions in order.
///
/// An empty script suits games with only computer players.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Position>,
}

impl ScriptedMoves {
    /// Creates a source from positions to hand out in order.
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Returns how many positions are left.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    type Error = ScriptExhausted;

    fn request_move(&mut self, player: &Player, _board: &Board) -> Result<Position, Self::Error> {
        let position = self.moves.pop_front().ok_or(ScriptExhausted)?;
        debug!(player = %player, %position, "Scripted move");
        Ok(position)
    }
}
