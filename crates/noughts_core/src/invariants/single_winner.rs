//! Single winner invariant: at most one player owns a line.

use super::Invariant;
use crate::rules::has_won;
use crate::{GameState, Player};

/// Invariant: X and O never both own a winning line.
///
/// Alternating legal moves stop at the first line, so a second one can
/// only appear through corruption.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        !(has_won(game.board(), Player::X) && has_won(game.board(), Player::O))
    }

    fn description() -> &'static str {
        "At most one player owns a winning line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_finished_game_holds() {
        let game = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_double_win_violates() {
        let mut game = GameState::new();
        game.board = "XXXOOO...".parse::<Board>().unwrap();
        assert!(!SingleWinnerInvariant::holds(&game));
    }
}
