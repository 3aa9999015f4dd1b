//! Line-oriented prompting over any reader and writer.
//!
//! Every prompt loops until it gets an answer it can use, printing the
//! reason for each rejection. End of input is the only way out of a loop.

use derive_more::{Display, Error};
use multitoe::{Board, MoveSource, Player, PlayerKind, PlayerName, Position, Symbol};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Error reading from or writing to the terminal.
#[derive(Debug, Display, Error)]
pub enum PromptError {
    /// Input reached end of file.
    #[display("Input closed")]
    Closed,
    /// Underlying read or write failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(err)
    }
}

/// Asks questions on `output` and reads answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of output.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a board size until a valid one is given.
    #[instrument(skip(self))]
    pub fn board(&mut self) -> Result<Board, PromptError> {
        loop {
            let answer = self.ask("\nEnter board size (3-10): ")?;
            let Ok(size) = answer.parse::<usize>() else {
                self.say("Error: Invalid input. Please enter a number.")?;
                continue;
            };
            match Board::new(size) {
                Ok(board) => return Ok(board),
                Err(err) => self.say(format!("Error: {}", err))?,
            }
        }
    }

    /// Asks how many players; a blank or unreadable answer means 2.
    #[instrument(skip(self))]
    pub fn player_count(&mut self) -> Result<usize, PromptError> {
        let answer = self.ask("\nEnter number of players (default 2): ")?;
        if answer.is_empty() {
            return Ok(2);
        }
        match answer.parse() {
            Ok(count) => Ok(count),
            Err(_) => {
                self.say("Invalid input. Using default: 2 players")?;
                Ok(2)
            }
        }
    }

    /// Asks for one player's name, symbol, and kind.
    #[instrument(skip(self))]
    pub fn player(&mut self, number: usize) -> Result<Player, PromptError> {
        self.say(format!("\n=== Player {} Configuration ===", number))?;

        let name = loop {
            let answer = self.ask("Enter player name: ")?;
            match PlayerName::parse(&answer) {
                Ok(name) => break name,
                Err(err) => self.say(format!("Error: {}", err))?,
            }
        };

        let symbol = loop {
            let answer = self.ask("Enter player symbol (single character): ")?;
            match Symbol::parse(&answer) {
                Ok(symbol) => break symbol,
                Err(err) => self.say(format!("Error: {}", err))?,
            }
        };

        let kind = self.player_kind()?;
        debug!(%name, %symbol, %kind, "Player configured");
        Ok(Player::new(name, symbol, kind))
    }

    fn player_kind(&mut self) -> Result<PlayerKind, PromptError> {
        let kinds: Vec<PlayerKind> = PlayerKind::iter().collect();
        let menu = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| format!("{} = {}", i + 1, kind))
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!("Player type ({}): ", menu);

        loop {
            let answer = self.ask(&prompt)?;
            let choice = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| kinds.get(i).copied());
            match choice {
                Some(kind) => return Ok(kind),
                None => self.say(format!(
                    "Invalid choice. Please enter a number from 1 to {}.",
                    kinds.len()
                ))?,
            }
        }
    }

    /// Asks whether to play another round.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<bool, PromptError> {
        loop {
            let answer = self.ask("\nPlay again? (y/n): ")?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'y' or 'n'.")?,
            }
        }
    }

    fn coordinate(&mut self, label: &str, max: usize) -> Result<Option<usize>, PromptError> {
        let answer = self.ask(&format!("Enter {} (0-{}): ", label, max))?;
        Ok(answer.parse().ok())
    }
}

impl<R: BufRead, W: Write> MoveSource for Prompter<R, W> {
    type Error = PromptError;

    /// Reads a row and a column. Only numeric shape is checked here; the
    /// engine decides whether the position is playable.
    fn request_move(&mut self, player: &Player, board: &Board) -> Result<Position, PromptError> {
        let max = board.size() - 1;
        loop {
            self.say(format!(
                "\n{}'s turn (Symbol: {})",
                player.name(),
                player.symbol()
            ))?;
            let row = self.coordinate("row", max)?;
            let col = self.coordinate("column", max)?;
            match (row, col) {
                (Some(row), Some(col)) => return Ok(Position::new(row, col)),
                _ => self.say("Error: Invalid input. Please enter valid numbers.")?,
            }
        }
    }
}
