//! Interactive game session on a line-oriented terminal.
//!
//! The session owns the [`GameState`] and talks to the core only through
//! its public operations. Input and output are generic so tests can script
//! a whole game.

use crate::cli::Mode;
use anyhow::Result;
use noughts_core::{GameError, GameState, GameStatus, IllegalMoveError, Player, Position};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What the person at the keyboard asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(Position),
    /// Start a new game in the same mode.
    Reset,
    /// Switch between computer and friend mode, then start a new game.
    ToggleMode,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Parses one line; `None` when it means nothing.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Input::Quit),
            "r" | "reset" | "restart" => Some(Input::Reset),
            "m" | "mode" => Some(Input::ToggleMode),
            other => Position::from_label_or_number(other).map(Input::Move),
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Opponent selection.
    pub mode: Mode,
    /// Side the computer plays in computer mode.
    pub computer: Player,
    /// Pause before each computer move.
    pub delay: Duration,
}

/// A running terminal game.
pub struct Session<R, W> {
    game: GameState,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given input and output.
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Self {
            game: GameState::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Plays until the person quits or input runs out.
    #[instrument(skip(self), fields(mode = ?self.config.mode, computer = %self.config.computer))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.start()?;

        loop {
            if self.computer_to_move() {
                self.play_computer()?;
                continue;
            }

            let Some(input) = self.read_input()? else {
                info!("Input closed, leaving session");
                return Ok(());
            };

            match input {
                Input::Quit => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                Input::Reset => self.start()?,
                Input::ToggleMode => {
                    self.config.mode = self.config.mode.toggled();
                    debug!(mode = ?self.config.mode, "Mode switched");
                    self.start()?;
                }
                Input::Move(position) => self.play_human(position)?,
            }
        }
    }

    /// Resets the game and prints the opening status.
    fn start(&mut self) -> Result<()> {
        self.game.reset();
        let intro = match self.config.mode {
            Mode::Computer => {
                let human = self.config.computer.opponent();
                format!("You're {human}. Good luck!")
            }
            Mode::Friend => self.turn_line(),
        };
        writeln!(self.output, "{intro}")?;
        self.print_board()
    }

    fn computer_to_move(&self) -> bool {
        self.config.mode == Mode::Computer
            && !self.game.status().is_terminal()
            && self.game.to_move() == self.config.computer
    }

    /// Reads lines until one parses. `None` at end of input.
    fn read_input(&mut self) -> Result<Option<Input>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }
            match Input::parse(&line) {
                Some(input) => return Ok(Some(input)),
                None => writeln!(
                    self.output,
                    "Enter a square 1-9 (or a name like 'center'), r to restart, m to switch mode, q to quit."
                )?,
            }
        }
    }

    fn play_human(&mut self, position: Position) -> Result<()> {
        match self.game.play(position.to_index()) {
            Ok(status) => {
                self.print_board()?;
                self.announce(status, false)
            }
            Err(GameError::IllegalMove(IllegalMoveError::Occupied { .. })) => {
                writeln!(self.output, "{position} is already taken.")?;
                Ok(())
            }
            Err(GameError::IllegalMove(err)) => {
                writeln!(self.output, "{err}.")?;
                Ok(())
            }
            Err(GameError::GameOver { .. }) => {
                writeln!(self.output, "The game is over. Type r to play again or q to quit.")?;
                Ok(())
            }
        }
    }

    fn play_computer(&mut self) -> Result<()> {
        if !self.config.delay.is_zero() {
            std::thread::sleep(self.config.delay);
        }

        let index = self.game.computer_move()?;
        let status = self.game.play(index)?;
        if let Some(position) = Position::from_index(index) {
            writeln!(self.output, "Computer plays {position}.")?;
        }
        self.print_board()?;
        self.announce(status, true)
    }

    /// Prints what happens next after a move by a person or the computer.
    fn announce(&mut self, status: GameStatus, by_computer: bool) -> Result<()> {
        let line = match status {
            GameStatus::Won(_) if by_computer => "Computer wins!".to_string(),
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => self.turn_line(),
        };
        writeln!(self.output, "{line}")?;

        if status.is_terminal() {
            writeln!(
                self.output,
                "Type r to play again, m to switch mode or q to quit."
            )?;
        }
        Ok(())
    }

    /// Whose turn it is, phrased for the current mode.
    fn turn_line(&self) -> String {
        let to_move = self.game.to_move();
        match self.config.mode {
            Mode::Computer if to_move == self.config.computer => "Computer's turn...".to_string(),
            Mode::Computer => "Your turn!".to_string(),
            Mode::Friend => format!("Player {to_move}'s turn"),
        }
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.game.board())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("q"), Some(Input::Quit));
        assert_eq!(Input::parse(" Reset \n"), Some(Input::Reset));
        assert_eq!(Input::parse("m"), Some(Input::ToggleMode));
        assert_eq!(Input::parse("5"), Some(Input::Move(Position::Center)));
        assert_eq!(Input::parse("top left"), Some(Input::Move(Position::TopLeft)));
        assert_eq!(Input::parse("banana"), None);
    }
}
