//! Move-by-move minimax report for a single board.

use anyhow::{Result, bail};
use noughts_core::{Board, Player, Position, analyze, best_move, evaluate, has_won};
use std::io::Write;
use tracing::instrument;

/// Infers the side to move from the mark counts.
///
/// X moves first, so equal counts mean X is next and one extra X means O.
pub fn infer_side(board: &Board) -> Result<Player> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);
    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        bail!("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")
    }
}

/// Prints the board, the score of every legal move for `side` and the pick.
///
/// Positive scores favour O and negative ones favour X.
#[instrument(skip(board, out), fields(board = %board.notation()))]
pub fn report(board: &Board, side: Option<Player>, out: &mut impl Write) -> Result<()> {
    if has_won(board, Player::X) && has_won(board, Player::O) {
        bail!("impossible board {}: both X and O have a line", board.notation());
    }

    let side = match side {
        Some(side) => side,
        None => infer_side(board)?,
    };

    writeln!(out, "{board}\n")?;

    let status = evaluate(board);
    if status.is_terminal() {
        writeln!(out, "Game over: {status}.")?;
        return Ok(());
    }

    writeln!(out, "{side} to move (O maximizes, X minimizes):")?;
    for scored in analyze(board, side)? {
        let label = Position::from_index(scored.index)
            .map(|p| p.label())
            .unwrap_or("?");
        writeln!(out, "  {} {:<13} {:>3}", scored.index + 1, label, scored.score)?;
    }

    let index = best_move(board, side)?;
    writeln!(out, "Best move: {}", index + 1)?;
    Ok(())
}
