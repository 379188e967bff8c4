//! Scoped hypothetical placements.

use crate::types::{Board, Player};
use std::ops::{Deref, DerefMut};

/// A mark placed on a borrowed board for the duration of a scope.
///
/// The square is emptied again when the guard drops, on every exit path,
/// so sibling branches of the search always see the board they started from.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    /// Marks `index` for `player`. The square must be empty.
    pub(crate) fn new(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index), "placement onto a non-empty square {index}");
        board.mark(index, player);
        Self { board, index }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}
