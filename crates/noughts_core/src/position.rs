//! Named board positions for front ends.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the board (index 0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses what a person types: a cell number 1-9 (as drawn on the
    /// board) or a label such as `center` or `top left`.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }

    /// Returns only the positions whose squares are empty, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter()
            .filter(|pos| board.is_empty(pos.to_index()))
            .collect()
    }
}

/// Lowercases and drops separators so "Top left", "top-left" and "topleft"
/// compare equal. "centre" is accepted for "center".
fn normalize(s: &str) -> String {
    let folded: String = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    folded.replace("centre", "center")
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
