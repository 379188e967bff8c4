//! Move legality and application.

use crate::error::IllegalMoveError;
use crate::types::{Board, CELL_COUNT, Player};
use tracing::{instrument, warn};

/// True iff `index` names a cell and that cell is empty.
pub fn is_legal_move(board: &Board, index: usize) -> bool {
    board.is_empty(index)
}

/// Returns the indices of all empty cells, ascending.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..CELL_COUNT).filter(|&index| board.is_empty(index)).collect()
}

/// Places `player`'s mark at `index`, returning the new board.
///
/// The input board is only borrowed; the caller keeps sole ownership of it
/// and it is left untouched whether or not the move is legal.
///
/// # Errors
///
/// [`IllegalMoveError::OutOfBounds`] for an index past 8 and
/// [`IllegalMoveError::Occupied`] for a marked cell.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, IllegalMoveError> {
    if index >= CELL_COUNT {
        warn!("Rejected move outside the board");
        return Err(IllegalMoveError::OutOfBounds { index });
    }
    if !board.is_empty(index) {
        warn!("Rejected move onto an occupied square");
        return Err(IllegalMoveError::Occupied { index });
    }

    let mut next = *board;
    next.mark(index, player);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_legal_on_empty_square() {
        let board = Board::new();
        assert!((0..9).all(|i| is_legal_move(&board, i)));
        assert!(!is_legal_move(&board, 9));
    }

    #[test]
    fn test_apply_marks_only_target() {
        let board: Board = "X...O....".parse().unwrap();
        let next = apply_move(&board, 8, Player::X).unwrap();

        assert_eq!(next.get(8), Some(Square::Occupied(Player::X)));
        for index in 0..8 {
            assert_eq!(next.get(index), board.get(index));
        }
        // The input is a value the caller still owns, unchanged.
        assert_eq!(board.notation(), "X...O....");
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(
            apply_move(&board, 0, Player::O),
            Err(IllegalMoveError::Occupied { index: 0 })
        );
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        assert_eq!(
            apply_move(&Board::new(), 42, Player::X),
            Err(IllegalMoveError::OutOfBounds { index: 42 })
        );
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board: Board = "X.O.X.O.X".parse().unwrap();
        assert_eq!(legal_moves(&board), vec![1, 3, 5, 7]);
    }
}
