//! The size×size playing grid.

use crate::action::Move;
use crate::error::SetupError;
use crate::types::{Cell, Position, Symbol};
use std::ops::Deref;
use tracing::instrument;

/// Smallest supported board dimension.
pub const MIN_SIZE: usize = 3;

/// Largest supported board dimension.
pub const MAX_SIZE: usize = 10;

/// Square tic-tac-toe board.
///
/// Cells are stored row-major. The fill counter always equals the number
/// of non-empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    filled: usize,
}

impl Board {
    /// Creates an empty board, rejecting sizes outside `MIN_SIZE..=MAX_SIZE`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SetupError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(SetupError::InvalidSize { size });
        }

        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(Position::new(row, col))))
            .collect();

        Ok(Self {
            size,
            cells,
            filled: 0,
        })
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns how many cells hold a symbol.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Checks that both coordinates lie on the board.
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Checks that the position is on the board and unoccupied.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.cell(Position::new(row, col)).is_some_and(Cell::is_empty)
    }

    /// Gets the cell at a position.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    /// Gets the symbol at a position, if the cell is filled.
    pub fn symbol_at(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cell(Position::new(row, col)).and_then(Cell::symbol)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Marks the move's cell with the move's symbol.
    ///
    /// Legality is the caller's job; see [`crate::validate_move`].
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply_move(&mut self, mv: &Move) {
        let placed = self.place(mv.position, mv.player);
        debug_assert!(placed, "apply_move on an unavailable cell: {mv}");
    }

    /// Checks if every cell holds a symbol.
    pub fn is_full(&self) -> bool {
        self.filled == self.size * self.size
    }

    /// Returns the positions of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    /// Clears every cell for a new round.
    #[instrument(skip(self), fields(size = self.size, filled = self.filled))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        self.filled = 0;
    }

    /// Places `symbol` at an empty position for the lifetime of the returned
    /// guard. The cell is cleared again when the guard drops.
    ///
    /// Returns `None` when the position is off the board or already filled.
    pub fn probe(&mut self, position: Position, symbol: Symbol) -> Option<Probe<'_>> {
        if self.place(position, symbol) {
            Some(Probe {
                board: self,
                position,
            })
        } else {
            None
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.is_valid_position(position.row, position.col)
            .then(|| position.row * self.size + position.col)
    }

    /// Fills an empty cell. Returns false, changing nothing, otherwise.
    fn place(&mut self, position: Position, symbol: Symbol) -> bool {
        match self.index(position) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i].fill(symbol);
                self.filled += 1;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self, position: Position) {
        if let Some(i) = self.index(position)
            && !self.cells[i].is_empty()
        {
            self.cells[i].clear();
            self.filled -= 1;
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = format!("{}{}", "---".repeat(self.size), "-".repeat(self.size + 1));

        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{}   ", col)?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", rule)?;

        for (row, cells) in self.rows().enumerate() {
            write!(f, "{} |", row)?;
            for cell in cells {
                write!(f, " {} |", cell)?;
            }
            writeln!(f)?;
            writeln!(f, "  {}", rule)?;
        }
        Ok(())
    }
}

/// A hypothetical placement on a board, undone on drop.
///
/// Dereferences to the board so rules can be evaluated against it.
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}
