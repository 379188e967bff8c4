//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Player};

/// Invariant: the board is exactly what the history produces.
///
/// Replaying the history from an empty board (X on even turns, O on odd
/// ones) must only ever mark empty squares and must end on the current
/// board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for (turn, &index) in game.history().iter().enumerate() {
            if !reconstructed.is_empty(index) {
                return false;
            }
            let player = if turn % 2 == 0 { Player::X } else { Player::O };
            reconstructed.mark(index, player);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
