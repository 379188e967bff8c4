//! Win detection.

use crate::types::{Board, Player, Square};

/// Three cell indices that win when they carry the same mark.
pub type WinLine = [usize; 3];

/// The eight winning lines: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` owns any complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == mark))
}

/// Returns the player with a complete line, checking X before O.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}
