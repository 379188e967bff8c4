//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board): legality, move application,
//! win and draw detection. Rules are kept apart from board storage so the
//! search and the game state machine can share them.

pub mod draw;
pub mod moves;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use moves::{apply_move, is_legal_move, legal_moves};
pub use status::evaluate;
pub use win::{WIN_LINES, WinLine, has_won, winner};
