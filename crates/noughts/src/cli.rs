//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::Player;

/// Noughts - play noughts and crosses against a friend or a perfect computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Who plays the other side
        #[arg(short, long, value_enum, default_value_t = Mode::Computer)]
        mode: Mode,

        /// Side the computer plays in computer mode
        #[arg(long, value_enum, default_value_t = Side::O)]
        computer_side: Side,

        /// Pause before the computer moves, in milliseconds
        #[arg(long, env = "NOUGHTS_DELAY_MS", default_value_t = 500)]
        delay_ms: u64,
    },

    /// Score every legal move on a board
    Analyze {
        /// Nine cells, row-major: X, O and . for empty (e.g. "XX.OO....")
        board: String,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(short, long, value_enum)]
        side: Option<Side>,
    },
}

/// Opponent selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Play against the minimax computer
    Computer,
    /// Two people share the terminal
    Friend,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Computer => Mode::Friend,
            Mode::Friend => Mode::Computer,
        }
    }
}

/// A side as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Crosses, moves first
    X,
    /// Noughts, moves second
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
