//! Turn state machine.
//!
//! ```text
//! InProgress --move completes a line--> Won(current player)
//! InProgress --move fills the board---> Draw
//! InProgress --otherwise--------------> InProgress (next player)
//! ```
//!
//! Won and Draw are terminal until [`Game::reset`].

use crate::action::Move;
use crate::board::Board;
use crate::error::{MoveError, SetupError, TurnError};
use crate::heuristic::ComputerHeuristic;
use crate::player::{Player, PlayerKind};
use crate::rules::{WinCheck, check_winner, validate_move};
use crate::state::{GameState, GameStatus};
use crate::strategy::MoveSource;
use crate::types::Position;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    win_check: WinCheck,
    heuristic: ComputerHeuristic,
    rng: StdRng,
}

impl Game {
    /// Starts a game on `board` with `players` taking turns in list order.
    ///
    /// # Errors
    ///
    /// - [`SetupError::InsufficientPlayers`] with fewer than two players
    /// - [`SetupError::DuplicateSymbol`] if two players share a symbol
    #[instrument(skip_all, fields(size = board.size(), players = players.len()))]
    pub fn new(board: Board, players: Vec<Player>) -> Result<Self, SetupError> {
        if players.len() < 2 {
            return Err(SetupError::InsufficientPlayers {
                count: players.len(),
            });
        }

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.symbol()) {
                warn!(symbol = %player.symbol(), "Duplicate symbol");
                return Err(SetupError::DuplicateSymbol {
                    symbol: player.symbol(),
                });
            }
        }

        info!("Game initialized");
        Ok(Self {
            state: GameState::new(board, players),
            win_check: check_winner,
            heuristic: ComputerHeuristic::default(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Seeds the computer players' randomness, for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replaces the win detector, for the engine and the computer heuristic.
    pub fn with_win_check(mut self, win_check: WinCheck) -> Self {
        self.win_check = win_check;
        self.heuristic = ComputerHeuristic::new(win_check);
        self
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays one turn for the current player.
    ///
    /// Human positions are requested from `source`; computer positions come
    /// from the heuristic. Returns the applied move.
    ///
    /// # Errors
    ///
    /// A [`TurnError::Move`] leaves the state unchanged and the same player
    /// still to move, so the caller can simply call again. A
    /// [`TurnError::Source`] is passed through from `source`.
    #[instrument(skip_all, fields(turn = self.state.move_count() + 1))]
    pub fn play_turn<S: MoveSource>(
        &mut self,
        source: &mut S,
    ) -> Result<Move, TurnError<S::Error>> {
        if self.state.is_over() {
            return Err(MoveError::GameOver.into());
        }

        let position = match self.state.current_player().kind() {
            PlayerKind::Human => {
                let player = self.state.current_player();
                source
                    .request_move(player, self.state.board())
                    .map_err(TurnError::Source)?
            }
            PlayerKind::Computer => self.computer_position()?,
        };

        Ok(self.submit_move(position)?)
    }

    /// Plays `position` for the current player, validating it first.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the round has ended, or an invalid-move
    /// error for an off-board or occupied position. The state is unchanged
    /// on any error.
    #[instrument(skip(self), fields(player = %self.state.current_player().symbol()))]
    pub fn submit_move(&mut self, position: Position) -> Result<Move, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        if let Err(err) = validate_move(self.state.board(), position) {
            debug!(error = %err, "Move rejected");
            return Err(err);
        }

        let mv = Move::new(self.state.current_player().symbol(), position);
        self.state.record(mv);
        self.update_status(&mv);
        Ok(mv)
    }

    /// Starts a new round with the same players, first player to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        info!("Round reset");
    }

    fn computer_position(&mut self) -> Result<Position, MoveError> {
        let current = self.state.current_index();
        let heuristic = self.heuristic;
        let (board, players) = self.state.board_and_players();
        heuristic
            .choose(board, &players[current], players, &mut self.rng)
            .map(|decision| decision.position)
            .ok_or(MoveError::NoEmptyCells)
    }

    /// Updates status after `mv`, or passes the turn.
    fn update_status(&mut self, mv: &Move) {
        if (self.win_check)(self.state.board(), Some(mv)) {
            info!(
                winner = %self.state.current_player(),
                moves = self.state.move_count(),
                "Round won"
            );
            self.state.set_status(GameStatus::Won(mv.player));
        } else if self.state.board().is_full() {
            info!(moves = self.state.move_count(), "Round drawn");
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ScriptedMoves;

    fn two_humans(size: usize) -> Game {
        let players = vec![
            Player::try_new("Ada", 'X', PlayerKind::Human).unwrap(),
            Player::try_new("Bob", 'O', PlayerKind::Human).unwrap(),
        ];
        Game::new(Board::new(size).unwrap(), players).unwrap()
    }

    #[test]
    fn test_requires_two_players() {
        let players = vec![Player::try_new("Solo", 'X', PlayerKind::Human).unwrap()];
        let err = Game::new(Board::new(3).unwrap(), players).unwrap_err();
        assert_eq!(err, SetupError::InsufficientPlayers { count: 1 });
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let players = vec![
            Player::try_new("Ada", 'X', PlayerKind::Human).unwrap(),
            Player::try_new("Bob", 'O', PlayerKind::Human).unwrap(),
            Player::try_new("Cy", 'X', PlayerKind::Computer).unwrap(),
        ];
        let err = Game::new(Board::new(3).unwrap(), players).unwrap_err();
        assert!(matches!(err, SetupError::DuplicateSymbol { symbol } if symbol.as_char() == 'X'));
    }

    #[test]
    fn test_rotation_wraps() {
        let players = vec![
            Player::try_new("A", 'A', PlayerKind::Human).unwrap(),
            Player::try_new("B", 'B', PlayerKind::Human).unwrap(),
            Player::try_new("C", 'C', PlayerKind::Human).unwrap(),
        ];
        let mut game = Game::new(Board::new(4).unwrap(), players).unwrap();

        for (i, col) in (0..4).enumerate() {
            assert_eq!(game.state().current_index(), i % 3);
            game.submit_move(Position::new(0, col)).unwrap();
        }
        assert_eq!(game.state().current_player().name(), "B");
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = two_humans(3);
        game.submit_move(Position::new(1, 1)).unwrap();
        let before = game.state().board().clone();

        assert_eq!(
            game.submit_move(Position::new(1, 1)),
            Err(MoveError::Occupied {
                position: Position::new(1, 1)
            })
        );
        assert!(matches!(
            game.submit_move(Position::new(0, 9)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(game.state().board(), &before);
        assert_eq!(game.state().move_count(), 1);
        assert_eq!(game.state().current_player().name(), "Bob");
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = two_humans(3);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.submit_move(Position::new(row, col)).unwrap();
        }
        assert!(game.state().is_over());
        assert_eq!(game.submit_move(Position::new(2, 2)), Err(MoveError::GameOver));

        let mut source = ScriptedMoves::new([Position::new(2, 2)]);
        assert!(matches!(
            game.play_turn(&mut source),
            Err(TurnError::Move(MoveError::GameOver))
        ));
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_substituted_win_check_is_used() {
        fn always(_: &Board, last: Option<&Move>) -> bool {
            last.is_some()
        }

        let mut game = two_humans(3).with_win_check(always);
        game.submit_move(Position::new(2, 1)).unwrap();
        assert_eq!(game.state().winner().map(Player::name), Some("Ada"));
    }

    #[test]
    fn test_source_error_passes_through() {
        let mut game = two_humans(3);
        let mut source = ScriptedMoves::default();
        assert!(matches!(
            game.play_turn(&mut source),
            Err(TurnError::Source(_))
        ));
        assert_eq!(game.state().move_count(), 0);
    }
}
