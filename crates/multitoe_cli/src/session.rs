//! Interactive session: setup, rounds, and replay.

use crate::config::SessionConfig;
use crate::prompt::{PromptError, Prompter};
use anyhow::{Context, Result};
use multitoe::{Board, Game, GameStatus, Player, TurnError};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const BANNER_WIDTH: usize = 50;

/// One run of the program: any number of rounds with the same players.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(prompter: Prompter<R, W>, config: SessionConfig) -> Self {
        Self { prompter, config }
    }

    /// Consumes the session, returning the prompter.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Runs setup and then rounds until the players stop.
    ///
    /// End of input ends the session cleanly. A game that cannot be set up
    /// (too few players, duplicate symbols) is returned as an error.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        match self.run_inner() {
            Err(err) if matches!(err.downcast_ref::<PromptError>(), Some(PromptError::Closed)) => {
                info!("Input closed, ending session");
                self.prompter.say("\nInput closed. Goodbye!")?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_inner(&mut self) -> Result<()> {
        self.banner("WELCOME TO TIC-TAC-TOE GAME")?;

        let mut game = self.setup()?;
        loop {
            self.play_round(&mut game)?;
            if !self.prompter.play_again()? {
                break;
            }
            game.reset();
            self.prompter.say("\nBoard has been reset. Starting new game...")?;
        }

        self.prompter.say("\nThank you for playing! Goodbye!")?;
        Ok(())
    }

    /// Builds the game from config, prompting for anything not configured.
    #[instrument(skip(self))]
    fn setup(&mut self) -> Result<Game> {
        let board = match self.config.board_size() {
            Some(size) => Board::new(*size).context("Invalid configured board size")?,
            None => self.prompter.board()?,
        };

        let players = if self.config.players().is_empty() {
            let count = self.prompter.player_count()?;
            (1..=count)
                .map(|number| self.prompter.player(number))
                .collect::<Result<Vec<Player>, _>>()?
        } else {
            debug!(count = self.config.players().len(), "Using configured players");
            self.config.to_players()
        };

        let game = Game::new(board, players).context("Game initialization failed")?;
        Ok(match self.config.seed() {
            Some(seed) => game.with_seed(*seed),
            None => game,
        })
    }

    /// Plays until the round reaches a terminal status.
    #[instrument(skip_all)]
    fn play_round(&mut self, game: &mut Game) -> Result<()> {
        self.banner("GAME START")?;
        self.prompter.say(game.state().board())?;

        while !game.state().is_over() {
            let player = game.state().current_player().clone();
            if player.is_computer() {
                self.prompter.say(format!("\n{} (computer) is thinking...", player.name()))?;
                self.think();
            }

            match game.play_turn(&mut self.prompter) {
                Ok(mv) => {
                    if player.is_computer() {
                        self.prompter
                            .say(format!("{} chose position {}", player.name(), mv.position))?;
                    }
                    self.prompter.say(game.state().board())?;
                }
                Err(TurnError::Move(err)) if err.is_retryable() => {
                    warn!(error = %err, player = %player, "Move rejected");
                    self.prompter.say(format!("Error: {}", err))?;
                    self.prompter.say("Please try again.")?;
                }
                Err(TurnError::Move(err)) => return Err(err.into()),
                Err(TurnError::Source(err)) => return Err(err.into()),
            }
        }

        self.show_result(game)
    }

    fn show_result(&mut self, game: &Game) -> Result<()> {
        let state = game.state();
        let rule = "=".repeat(BANNER_WIDTH);

        self.prompter.say(format!("\n{}", rule))?;
        match (state.status(), state.winner()) {
            (GameStatus::Won(_), Some(winner)) => {
                let line = format!("{} WINS!", winner.name());
                self.prompter.say(format!("{:^width$}", line, width = BANNER_WIDTH))?;
            }
            _ => {
                self.prompter.say(format!("{:^width$}", "IT'S A DRAW!", width = BANNER_WIDTH))?;
            }
        }
        self.prompter.say(&rule)?;
        self.prompter.say(format!("Total moves: {}", state.move_count()))?;
        Ok(())
    }

    fn banner(&mut self, title: &str) -> Result<(), PromptError> {
        let rule = "=".repeat(BANNER_WIDTH);
        self.prompter.say(format!("\n{}", rule))?;
        self.prompter.say(format!("{:^width$}", title, width = BANNER_WIDTH))?;
        self.prompter.say(&rule)
    }

    fn think(&self) {
        let delay = *self.config.think_delay_ms();
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
    }
}
