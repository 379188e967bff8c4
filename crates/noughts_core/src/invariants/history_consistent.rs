//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: one history entry per occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_full_game_holds() {
        // X O X / X O O / O X X, a draw.
        let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_unrecorded_square_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.board.set(0, Square::Occupied(Player::O)).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
