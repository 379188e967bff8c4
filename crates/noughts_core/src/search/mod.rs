//! Exhaustive minimax search.
//!
//! Scores are absolute rather than side-relative: a win for O is
//! [`WIN_SCORE`], a win for X is `-WIN_SCORE`, a draw is [`DRAW_SCORE`].
//! O maximizes and X minimizes, so the same scores give optimal play for
//! whichever side the search is asked to move.
//!
//! Every continuation is explored. There is no pruning and no memoization;
//! a full search from the empty board visits fewer than a million nodes.

mod placement;

use crate::error::NoLegalMovesError;
use crate::rules::{has_won, is_full};
use crate::types::{Board, CELL_COUNT, Player};
use placement::Placement;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Score of a position O has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// A candidate move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index (0-8).
    pub index: usize,
    /// Minimax score with optimal play from both sides afterwards.
    pub score: i32,
}

/// Returns the fixed score of a finished board, or `None` while play goes on.
///
/// Checked in order: X line, O line, full board.
pub fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, Player::X) {
        Some(-WIN_SCORE)
    } else if has_won(board, Player::O) {
        Some(WIN_SCORE)
    } else if is_full(board) {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Picks the optimal move for `side`.
///
/// O takes the greatest score and X the least; ties go to the lowest index.
/// The caller's board is never modified.
///
/// # Errors
///
/// [`NoLegalMovesError`] when the board is full or already won.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn best_move(board: &Board, side: Player) -> Result<usize, NoLegalMovesError> {
    let scored = analyze(board, side)?;
    let best = select(side, &scored).ok_or(NoLegalMovesError)?;
    debug!(index = best.index, score = best.score, "Search chose move");
    Ok(best.index)
}

/// Scores every legal move for `side`, in ascending index order.
///
/// # Errors
///
/// [`NoLegalMovesError`] when the board is full or already won.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &Board, side: Player) -> Result<Vec<ScoredMove>, NoLegalMovesError> {
    if terminal_score(board).is_some() {
        warn!("Search requested on a finished board");
        return Err(NoLegalMovesError);
    }

    let mut scratch = *board;
    let mut scored = Vec::with_capacity(scratch.empty_count());
    for index in 0..CELL_COUNT {
        if !scratch.is_empty(index) {
            continue;
        }
        let score = {
            let mut placed = Placement::new(&mut scratch, index, side);
            minimax(&mut placed, side.opponent())
        };
        scored.push(ScoredMove { index, score });
    }

    debug_assert_eq!(scratch, *board, "search left a mark behind");
    Ok(scored)
}

/// The first move in `moves` that no later move strictly improves on.
fn select(side: Player, moves: &[ScoredMove]) -> Option<ScoredMove> {
    moves.iter().copied().reduce(|best, candidate| {
        if prefers(side, candidate.score, best.score) {
            candidate
        } else {
            best
        }
    })
}

/// Whether `side` strictly prefers `candidate` over `incumbent`.
fn prefers(side: Player, candidate: i32, incumbent: i32) -> bool {
    match side {
        Player::O => candidate > incumbent,
        Player::X => candidate < incumbent,
    }
}

fn minimax(board: &mut Board, side: Player) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best: Option<i32> = None;
    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        let score = {
            let mut placed = Placement::new(board, index, side);
            minimax(&mut placed, side.opponent())
        };
        if best.is_none_or(|incumbent| prefers(side, score, incumbent)) {
            best = Some(score);
        }
    }

    // A board that is not terminal always has an empty square.
    best.unwrap_or(DRAW_SCORE)
}
