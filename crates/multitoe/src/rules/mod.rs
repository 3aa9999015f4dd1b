//! Game rules.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the engine and the computer heuristic share one definition.

pub mod legal;
pub mod win;

pub use legal::validate_move;
pub use win::{WinCheck, check_winner};
