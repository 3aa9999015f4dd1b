//! Error types for game setup and play.

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::types::{Position, Symbol};
use derive_more::{Display, Error};

/// Error raised while building a board, a player, or a game.
///
/// Size, name, and symbol errors are correctable by asking again.
/// Player-count and uniqueness errors abort game construction.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Board size outside the supported range.
    #[display(
        "Board size must be between {}x{} and {}x{}, got {size}",
        MIN_SIZE, MIN_SIZE, MAX_SIZE, MAX_SIZE
    )]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },

    /// Player name is empty or too long.
    #[display("Invalid player name: {reason}")]
    InvalidPlayerName {
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// Symbol is not a single allowed character.
    #[display("Invalid symbol {input:?}: {reason}")]
    InvalidSymbol {
        /// The raw input that was rejected.
        input: String,
        /// Why the symbol was rejected.
        reason: &'static str,
    },

    /// Fewer than two players supplied.
    #[display("Game requires at least 2 players, got {count}")]
    InsufficientPlayers {
        /// Number of players supplied.
        count: usize,
    },

    /// Two players share a symbol.
    #[display("Duplicate symbol '{symbol}' found. Each player must have a unique symbol")]
    DuplicateSymbol {
        /// The symbol used more than once.
        symbol: Symbol,
    },
}

/// Error raised when a move cannot be applied.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Position lies outside the board.
    #[display("Position {position} is out of bounds. Valid range: 0-{max}")]
    OutOfBounds {
        /// The requested position.
        position: Position,
        /// Largest valid row or column index.
        max: usize,
    },

    /// The cell already holds a symbol.
    #[display("Cell {position} is already occupied")]
    Occupied {
        /// The requested position.
        position: Position,
    },

    /// The round has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A computer player was asked to move on a full board.
    #[display("No empty cells left to play")]
    NoEmptyCells,
}

impl MoveError {
    /// Returns true for errors the same player can fix by choosing another cell.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoveError::OutOfBounds { .. } | MoveError::Occupied { .. })
    }
}

/// Error from a single turn: either the move was illegal or the move
/// source itself failed.
#[derive(Debug)]
pub enum TurnError<E> {
    /// The engine rejected the move.
    Move(MoveError),
    /// The human move source could not produce a position.
    Source(E),
}

impl<E> From<MoveError> for TurnError<E> {
    fn from(err: MoveError) -> Self {
        TurnError::Move(err)
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TurnError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::Move(err) => write!(f, "{}", err),
            TurnError::Source(err) => write!(f, "Move source failed: {}", err),
        }
    }
}

impl<E> std::error::Error for TurnError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Move(err) => Some(err),
            TurnError::Source(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_errors_are_retryable() {
        let position = Position::new(0, 0);
        assert!(MoveError::Occupied { position }.is_retryable());
        assert!(MoveError::OutOfBounds { position, max: 2 }.is_retryable());
        assert!(!MoveError::GameOver.is_retryable());
    }

    #[test]
    fn test_messages_name_the_position() {
        let err = MoveError::OutOfBounds {
            position: Position::new(3, 1),
            max: 2,
        };
        assert_eq!(
            err.to_string(),
            "Position (3, 1) is out of bounds. Valid range: 0-2"
        );
    }

    #[test]
    fn test_size_message_names_range() {
        let err = SetupError::InvalidSize { size: 11 };
        assert_eq!(
            err.to_string(),
            "Board size must be between 3x3 and 10x10, got 11"
        );
    }
}
