//! Error types for the noughts core.
//!
//! Every error is local to a single call; none of them leave a board or a
//! game state partially mutated.

use crate::types::{GameStatus, Player};
use derive_more::{Display, Error, From};

/// A move that the rules refuse.
///
/// Callers are expected to report and ignore the input; no mutation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMoveError {
    /// The index does not name one of the nine cells.
    #[display("Position {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// Offending index.
        index: usize,
    },

    /// The cell already carries a mark.
    #[display("Square {index} is already occupied")]
    Occupied {
        /// Offending index.
        index: usize,
    },
}

impl IllegalMoveError {
    /// Returns the index the move targeted.
    pub fn index(&self) -> usize {
        match self {
            IllegalMoveError::OutOfBounds { index } | IllegalMoveError::Occupied { index } => {
                *index
            }
        }
    }
}

/// The search was asked for a move on a board that has none.
///
/// This is a contract violation by the caller, who should have checked
/// [`evaluate`](crate::evaluate) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal moves: the board is full or the game is already decided")]
pub struct NoLegalMovesError;

/// Errors raised by [`GameState`](crate::GameState) transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The move itself is illegal.
    #[display("{_0}")]
    #[from]
    IllegalMove(#[error(source)] IllegalMoveError),

    /// The game has already reached a terminal status.
    #[display("Game is already over ({status})")]
    GameOver {
        /// Terminal status at the time of the attempt.
        status: GameStatus,
    },
}

/// A serialized [`GameState`](crate::GameState) whose fields disagree.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// The recorded history is not a legal game.
    #[display("Snapshot history does not replay: {_0}")]
    Replay(#[error(source)] GameError),

    /// Replaying the history gives a different board.
    #[display("Snapshot board {stored} does not match its history ({replayed})")]
    BoardMismatch {
        /// Board as stored, in text notation.
        stored: String,
        /// Board reached by replaying the history.
        replayed: String,
    },

    /// Replaying the history gives a different side to move.
    #[display("Snapshot says {stored} to move but its history gives {replayed}")]
    TurnMismatch {
        /// Side to move as stored.
        stored: Player,
        /// Side to move after replaying the history.
        replayed: Player,
    },
}

/// A board string that does not describe nine cells.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Too few or too many cells.
    #[display("Board must have {expected} cells, got {got}")]
    WrongLength {
        /// Required number of cells.
        expected: usize,
        /// Number of cells found.
        got: usize,
    },

    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid character '{character}' at cell {position}")]
    InvalidCell {
        /// The unexpected character.
        character: char,
        /// Cell index the character would have filled.
        position: usize,
    },
}
