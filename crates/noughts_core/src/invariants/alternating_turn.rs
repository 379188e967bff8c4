//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: players alternate, X first.
///
/// X has as many marks as O or exactly one more. While the game is open the
/// side to move is X when the counts are equal and O otherwise; once it is
/// over the side to move is whoever played last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        let next = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return false;
        };

        let expected = if game.status().is_terminal() {
            next.opponent()
        } else {
            next
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_finished_game_holds() {
        let game = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_side_to_move_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
