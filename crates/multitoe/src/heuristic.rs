//! Move selection for computer players.
//!
//! The heuristic is a fixed cascade; the first rule that yields a cell wins:
//!
//! 1. Win now, if any empty cell completes a line for us.
//! 2. Block, if any empty cell completes a line for any opponent.
//! 3. Take the center of an odd-sized board.
//! 4. Take a random empty corner.
//! 5. Take a random empty cell.
//!
//! Rules 1 and 2 probe the board with hypothetical symbols. Every probe is
//! a [`crate::Probe`] guard, so the board is restored before the next
//! candidate is tried and is never left changed by the search.

use crate::action::Move;
use crate::board::Board;
use crate::player::Player;
use crate::rules::{WinCheck, check_winner};
use crate::types::{Position, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule of the cascade produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Rule {
    /// Completes one of our lines.
    Win,
    /// Stops an opponent completing a line.
    Block,
    /// Center of an odd-sized board.
    Center,
    /// Random empty corner.
    Corner,
    /// Random empty cell.
    Random,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// Rule cascade used by [`crate::PlayerKind::Computer`] players.
#[derive(Debug, Clone, Copy)]
pub struct ComputerHeuristic {
    win_check: WinCheck,
}

impl ComputerHeuristic {
    /// Creates a heuristic that probes with the given win detector.
    pub fn new(win_check: WinCheck) -> Self {
        Self { win_check }
    }

    /// Picks a cell for `player`, or `None` if the board is full.
    ///
    /// `players` is the full rotation; everyone in it other than `player`
    /// counts as an opponent for the blocking rule.
    #[instrument(skip_all, fields(player = %player.symbol(), size = board.size()))]
    pub fn choose<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        player: &Player,
        players: &[Player],
        rng: &mut R,
    ) -> Option<Decision> {
        let decision = self
            .winning_cell(board, player.symbol())
            .map(|position| Decision {
                position,
                rule: Rule::Win,
            })
            .or_else(|| {
                self.blocking_cell(board, player, players)
                    .map(|position| Decision {
                        position,
                        rule: Rule::Block,
                    })
            })
            .or_else(|| {
                center_cell(board).map(|position| Decision {
                    position,
                    rule: Rule::Center,
                })
            })
            .or_else(|| {
                random_corner(board, rng).map(|position| Decision {
                    position,
                    rule: Rule::Corner,
                })
            })
            .or_else(|| {
                board
                    .empty_cells()
                    .choose(rng)
                    .map(|&position| Decision {
                        position,
                        rule: Rule::Random,
                    })
            });

        if let Some(decision) = &decision {
            debug!(position = %decision.position, rule = %decision.rule, "Computer chose cell");
        }
        decision
    }

    /// First empty cell, row-major, where `symbol` would complete a line.
    fn winning_cell(&self, board: &mut Board, symbol: Symbol) -> Option<Position> {
        board
            .empty_cells()
            .into_iter()
            .find(|&position| self.wins_at(board, symbol, position))
    }

    /// First empty cell, row-major, where some opponent would complete a line.
    /// Within a cell, opponents are tried in rotation order.
    fn blocking_cell(
        &self,
        board: &mut Board,
        me: &Player,
        players: &[Player],
    ) -> Option<Position> {
        let opponents: Vec<Symbol> = players
            .iter()
            .filter(|p| *p != me)
            .map(Player::symbol)
            .collect();

        board.empty_cells().into_iter().find(|&position| {
            opponents
                .iter()
                .any(|&symbol| self.wins_at(board, symbol, position))
        })
    }

    fn wins_at(&self, board: &mut Board, symbol: Symbol, position: Position) -> bool {
        board.probe(position, symbol).is_some_and(|probe| {
            (self.win_check)(&probe, Some(&Move::new(symbol, position)))
        })
    }
}

impl Default for ComputerHeuristic {
    fn default() -> Self {
        Self::new(check_winner)
    }
}

fn center_cell(board: &Board) -> Option<Position> {
    let size = board.size();
    let center = size / 2;
    (size % 2 == 1 && board.is_cell_empty(center, center)).then(|| Position::new(center, center))
}

fn random_corner<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let last = board.size() - 1;
    let corners: Vec<Position> = [(0, 0), (0, last), (last, 0), (last, last)]
        .into_iter()
        .filter(|&(row, col)| board.is_cell_empty(row, col))
        .map(|(row, col)| Position::new(row, col))
        .collect();
    corners.choose(rng).copied()
}
