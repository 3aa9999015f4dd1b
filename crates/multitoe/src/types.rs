//! Core domain types: symbols, positions, and cells.

use crate::error::SetupError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Punctuation accepted as a symbol besides letters and digits.
const ALLOWED_PUNCTUATION: &str = "!@#$%^&*";

/// A player's mark on the board.
///
/// Always a single non-whitespace character that is alphanumeric or
/// one of `!@#$%^&*`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Validates a single character as a symbol.
    #[instrument]
    pub fn new(c: char) -> Result<Self, SetupError> {
        if c.is_whitespace() {
            return Err(SetupError::InvalidSymbol {
                input: c.to_string(),
                reason: "Symbol cannot be a whitespace character",
            });
        }
        if !c.is_alphanumeric() && !ALLOWED_PUNCTUATION.contains(c) {
            return Err(SetupError::InvalidSymbol {
                input: c.to_string(),
                reason: "Symbol must be alphanumeric or one of: !@#$%^&*",
            });
        }
        Ok(Self(c))
    }

    /// Parses raw user input, which must be exactly one character after trimming.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, SetupError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(SetupError::InvalidSymbol {
                input: input.to_string(),
                reason: "Symbol must be exactly one character",
            }),
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = SetupError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// A (row, col) coordinate on the board.
///
/// Ordering is row-major, which is the scan order used everywhere.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub(crate) enum Square {
    /// Nobody has played here this round.
    #[default]
    Empty,
    /// Holds a player's symbol.
    Filled(Symbol),
}

/// A cell on the board. Its position is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    square: Square,
}

impl Cell {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            square: Square::Empty,
        }
    }

    /// Returns where this cell sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the symbol in this cell, if any.
    pub fn symbol(&self) -> Option<Symbol> {
        match self.square {
            Square::Empty => None,
            Square::Filled(symbol) => Some(symbol),
        }
    }

    /// Checks if nobody has played here.
    pub fn is_empty(&self) -> bool {
        self.square == Square::Empty
    }

    pub(crate) fn fill(&mut self, symbol: Symbol) {
        self.square = Square::Filled(symbol);
    }

    pub(crate) fn clear(&mut self) {
        self.square = Square::Empty;
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.square {
            Square::Empty => write!(f, " "),
            Square::Filled(symbol) => write!(f, "{}", symbol),
        }
    }
}
