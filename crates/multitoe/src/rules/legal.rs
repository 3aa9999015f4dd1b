//! Move legality.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::Position;
use tracing::instrument;

/// Checks that a position is on the board and unoccupied.
///
/// This is the whole contract for a human-submitted move. It never mutates
/// the board, so a rejected move leaves the game untouched.
#[instrument(skip(board), fields(size = board.size()))]
pub fn validate_move(board: &Board, position: Position) -> Result<(), MoveError> {
    if !board.is_valid_position(position.row, position.col) {
        return Err(MoveError::OutOfBounds {
            position,
            max: board.size() - 1,
        });
    }

    if !board.is_cell_empty(position.row, position.col) {
        return Err(MoveError::Occupied { position });
    }

    Ok(())
}
