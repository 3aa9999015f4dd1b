//! Multitoe - N×N tic-tac-toe for any number of players
//!
//! This crate is the pure game engine: no I/O, no prompting. Callers build a
//! [`Board`] and a list of [`Player`]s, hand them to [`Game::new`], and then
//! drive rounds with [`Game::play_turn`] or [`Game::submit_move`].
//!
//! # Architecture
//!
//! - **Board**: size×size grid of cells with a fill counter
//! - **Rules**: win detection through the last move, move legality
//! - **Heuristic**: rule cascade used by computer players
//! - **Game**: turn state machine (in progress, won, draw) with reset
//!
//! # Example
//!
//! ```
//! use multitoe::{Board, Game, GameStatus, Player, PlayerKind, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board = Board::new(3)?;
//! let players = vec![
//!     Player::try_new("Ada", 'X', PlayerKind::Human)?,
//!     Player::try_new("Bob", 'O', PlayerKind::Human)?,
//! ];
//! let mut game = Game::new(board, players)?;
//!
//! game.submit_move(Position::new(1, 1))?;
//! assert_eq!(game.state().status(), &GameStatus::InProgress);
//! assert_eq!(game.state().current_player().name(), "Bob");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod game;
mod heuristic;
mod player;
mod rules;
mod state;
mod strategy;
mod types;

// Crate-level exports - Board model
pub use board::{Board, MAX_SIZE, MIN_SIZE, Probe};
pub use types::{Cell, Position, Symbol};

// Crate-level exports - Players and moves
pub use action::Move;
pub use player::{MAX_NAME_LEN, Player, PlayerKind, PlayerName};

// Crate-level exports - Rules
pub use rules::{WinCheck, check_winner, validate_move};

// Crate-level exports - Computer players
pub use heuristic::{ComputerHeuristic, Decision, Rule};

// Crate-level exports - Engine
pub use game::Game;
pub use state::{GameState, GameStatus};
pub use strategy::{MoveSource, ScriptExhausted, ScriptedMoves};

// Crate-level exports - Errors
pub use error::{MoveError, SetupError, TurnError};
