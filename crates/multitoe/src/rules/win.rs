//! Win detection.
//!
//! A move can only complete a line that passes through it, so only the
//! moved-into row, column, and diagonals are scanned. Each scan is O(size).

use crate::action::Move;
use crate::board::Board;
use crate::types::Symbol;
use tracing::{instrument, trace};

/// Signature of a win detector, so the engine can be handed a substitute.
pub type WinCheck = fn(&Board, Option<&Move>) -> bool;

/// Checks whether `last_move` completed a full line of its symbol.
///
/// Returns false when there is no last move.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board, last_move: Option<&Move>) -> bool {
    let Some(mv) = last_move else {
        return false;
    };

    let size = board.size();
    let (row, col) = (mv.position.row, mv.position.col);
    let symbol = mv.player;

    let won = line_complete(board, symbol, (0..size).map(|c| (row, c)))
        || line_complete(board, symbol, (0..size).map(|r| (r, col)))
        || (row == col && line_complete(board, symbol, (0..size).map(|i| (i, i))))
        || (row + col == size - 1
            && line_complete(board, symbol, (0..size).map(|i| (i, size - 1 - i))));

    trace!(%mv, won, "Checked lines through last move");
    won
}

fn line_complete(
    board: &Board,
    symbol: Symbol,
    mut cells: impl Iterator<Item = (usize, usize)>,
) -> bool {
    cells.all(|(row, col)| board.symbol_at(row, col) == Some(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    fn fill(board: &mut Board, symbol: Symbol, cells: &[(usize, usize)]) -> Move {
        let mut last = None;
        for &(row, col) in cells {
            let mv = Move::new(symbol, Position::new(row, col));
            board.apply_move(&mv);
            last = Some(mv);
        }
        last.unwrap()
    }

    #[test]
    fn test_no_last_move_is_no_win() {
        let board = Board::new(3).unwrap();
        assert!(!check_winner(&board, None));
    }

    #[test]
    fn test_every_full_row_wins() {
        for size in 3..=10 {
            for row in 0..size {
                let mut board = Board::new(size).unwrap();
                let cells: Vec<_> = (0..size).map(|c| (row, c)).collect();
                let last = fill(&mut board, sym('X'), &cells);
                assert!(check_winner(&board, Some(&last)), "size {size} row {row}");
            }
        }
    }

    #[test]
    fn test_every_full_column_wins() {
        for size in 3..=10 {
            for col in 0..size {
                let mut board = Board::new(size).unwrap();
                let cells: Vec<_> = (0..size).map(|r| (r, col)).collect();
                let last = fill(&mut board, sym('O'), &cells);
                assert!(check_winner(&board, Some(&last)), "size {size} col {col}");
            }
        }
    }

    #[test]
    fn test_row_with_gap_does_not_win() {
        for size in 3..=10 {
            for gap in 0..size {
                let mut board = Board::new(size).unwrap();
                let cells: Vec<_> = (0..size).filter(|&c| c != gap).map(|c| (0, c)).collect();
                let last = fill(&mut board, sym('X'), &cells);
                assert!(!check_winner(&board, Some(&last)), "size {size} gap {gap}");
            }
        }
    }

    #[test]
    fn test_column_with_gap_does_not_win() {
        for size in 3..=10 {
            for gap in 0..size {
                let mut board = Board::new(size).unwrap();
                let cells: Vec<_> = (0..size).filter(|&r| r != gap).map(|r| (r, 0)).collect();
                let last = fill(&mut board, sym('O'), &cells);
                assert!(!check_winner(&board, Some(&last)), "size {size} gap {gap}");
            }
        }
    }

    #[test]
    fn test_diagonals_with_gap_do_not_win() {
        for size in 3..=10 {
            for gap in 0..size {
                let mut main = Board::new(size).unwrap();
                let cells: Vec<_> = (0..size).filter(|&i| i != gap).map(|i| (i, i)).collect();
                let last = fill(&mut main, sym('X'), &cells);
                assert!(!check_winner(&main, Some(&last)), "main size {size} gap {gap}");

                let mut anti = Board::new(size).unwrap();
                let cells: Vec<_> = (0..size)
                    .filter(|&i| i != gap)
                    .map(|i| (i, size - 1 - i))
                    .collect();
                let last = fill(&mut anti, sym('X'), &cells);
                assert!(!check_winner(&anti, Some(&last)), "anti size {size} gap {gap}");
            }
        }
    }

    #[test]
    fn test_diagonals_win() {
        for size in 3..=10 {
            let mut board = Board::new(size).unwrap();
            let main: Vec<_> = (0..size).map(|i| (i, i)).collect();
            let last = fill(&mut board, sym('X'), &main);
            assert!(check_winner(&board, Some(&last)));

            let mut board = Board::new(size).unwrap();
            let anti: Vec<_> = (0..size).map(|i| (i, size - 1 - i)).collect();
            let last = fill(&mut board, sym('X'), &anti);
            assert!(check_winner(&board, Some(&last)));
        }
    }

    #[test]
    fn test_diagonal_only_checked_through_diagonal_cells() {
        let mut board = Board::new(4).unwrap();
        fill(&mut board, sym('X'), &[(0, 0), (1, 1), (2, 2), (3, 3)]);

        // Same symbol, but (0, 1) is on neither diagonal, nor does its row or column complete.
        let off = Move::new(sym('X'), Position::new(0, 1));
        board.apply_move(&off);
        assert!(!check_winner(&board, Some(&off)));

        let on = Move::new(sym('X'), Position::new(2, 2));
        assert!(check_winner(&board, Some(&on)));
    }

    #[test]
    fn test_mixed_symbols_do_not_win() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, sym('X'), &[(0, 0), (0, 1)]);
        let last = fill(&mut board, sym('O'), &[(0, 2)]);
        assert!(!check_winner(&board, Some(&last)));
    }
}
