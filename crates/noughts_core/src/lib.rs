//! Noughts core - rules engine and minimax opponent for noughts and crosses.
//!
//! # Architecture
//!
//! - **Rules**: legality, move application, win and draw detection
//! - **Search**: exhaustive minimax that picks the computer's move
//! - **Game**: an explicit [`GameState`] value in place of ambient globals
//! - **Invariants**: composable checks of what every reachable state satisfies
//!
//! The crate performs no I/O. Rendering, input and pacing belong to the
//! caller.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameStatus, Player, apply_move, best_move, evaluate, new_game};
//!
//! let game = new_game();
//! let board = apply_move(game.board(), 0, Player::X)?;
//! let reply = best_move(&board, Player::O)?;
//! let board = apply_move(&board, reply, Player::O)?;
//! assert_eq!(evaluate(&board), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use error::{GameError, IllegalMoveError, NoLegalMovesError, ParseBoardError, SnapshotError};
pub use game::{GameState, new_game};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, NoughtsInvariants};
pub use position::Position;
pub use rules::{
    WIN_LINES, WinLine, apply_move, evaluate, has_won, is_full, is_legal_move, legal_moves, winner,
};
pub use search::{DRAW_SCORE, ScoredMove, WIN_SCORE, analyze, best_move};
pub use types::{Board, CELL_COUNT, GameStatus, Player, Square};
