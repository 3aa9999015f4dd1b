//! Round state: board, rotation, status, and history.

use crate::action::Move;
use crate::board::Board;
use crate::player::Player;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The player with this symbol completed a line.
    Won(Symbol),
    /// The board filled up with no completed line.
    Draw,
}

impl GameStatus {
    /// Checks for a terminal status.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete state of one round.
///
/// Owns the board and the move history. The player list is fixed for the
/// life of the state and survives resets.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    current: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh state. Player validation is done by [`crate::Game::new`].
    pub(crate) fn new(board: Board, players: Vec<Player>) -> Self {
        Self {
            board,
            players,
            current: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players in rotation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player whose turn it is (or who made the final move).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the index of the current player in rotation order.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Checks for a terminal status.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winning player, set only when the round was won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(symbol) => self.players.iter().find(|p| p.symbol() == symbol),
            _ => None,
        }
    }

    /// Returns every move of this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns how many moves have been made this round.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Splits the state so the board can be probed while players are read.
    pub(crate) fn board_and_players(&mut self) -> (&mut Board, &[Player]) {
        (&mut self.board, &self.players)
    }

    /// Applies a move (unchecked - use Game::submit_move for validation).
    pub(crate) fn record(&mut self, mv: Move) {
        self.board.apply_move(&mv);
        self.history.push(mv);
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Passes the turn to the next player, wrapping around.
    pub(crate) fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(next = %self.current_player(), "Turn passed");
    }

    /// Clears the round and returns the turn to the first player.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub(crate) fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.current = 0;
    }
}
