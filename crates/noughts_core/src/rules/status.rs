//! Game status evaluation.

use super::draw::is_full;
use super::win::has_won;
use crate::types::{Board, GameStatus, Player};
use tracing::error;

/// Derives the status of a board.
///
/// X's lines are checked before O's, then fullness. A board where both
/// players own a line cannot arise from alternating legal moves; it is a
/// defect, asserted in debug builds and logged (reporting X) otherwise.
pub fn evaluate(board: &Board) -> GameStatus {
    let x_won = has_won(board, Player::X);
    let o_won = has_won(board, Player::O);

    if x_won && o_won {
        error!(board = %board.notation(), "Both players own a winning line");
    }
    debug_assert!(
        !(x_won && o_won),
        "both players own a winning line: {}",
        board.notation()
    );

    if x_won {
        GameStatus::Won(Player::X)
    } else if o_won {
        GameStatus::Won(Player::O)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_detected() {
        let board: Board = "OOO.XX.X.".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XOXOXOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "XO..X..O.".parse().unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
