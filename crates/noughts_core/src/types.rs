//! Core domain types for noughts and crosses.

use crate::error::{IllegalMoveError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark character for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 board.
///
/// The board is a plain value: operations that "change" it either return a
/// new board or take `&mut self` on a board the caller owns outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from raw squares.
    ///
    /// No rule is checked; states built this way may be unreachable in play.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Overwrites the square at the given index.
    ///
    /// This bypasses the rules; use [`apply_move`](crate::apply_move) for play.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), IllegalMoveError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(IllegalMoveError::OutOfBounds { index })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Counts the empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Marks an in-range square. Callers have already checked legality.
    pub(crate) fn mark(&mut self, index: usize, player: Player) {
        self.squares[index] = Square::Occupied(player);
    }

    /// Empties an in-range square.
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }

    /// Nine-character notation, row-major, `.` for empty squares.
    pub fn notation(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(p) => p.symbol(),
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid with empty squares numbered 1-9.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells: `X`/`O` (any case) for marks, `.`, `-` or `_` for
/// empty squares. Whitespace and `|`, `/` separators are skipped.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELL_COUNT];
        let mut got = 0;

        for character in s.chars() {
            if character.is_ascii_whitespace() || character == '|' || character == '/' {
                continue;
            }
            let square = match character {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                _ => {
                    return Err(ParseBoardError::InvalidCell {
                        character,
                        position: got,
                    });
                }
            };
            if got < CELL_COUNT {
                squares[got] = square;
            }
            got += 1;
        }

        if got != CELL_COUNT {
            return Err(ParseBoardError::WrongLength {
                expected: CELL_COUNT,
                got,
            });
        }

        Ok(Self { squares })
    }
}

/// Current status of the game, always derived from a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once no further move is accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
