//! Explicit game state machine.
//!
//! A [`GameState`] carries everything a session needs: the board, the side
//! to move and the moves played so far. Status is never stored; it is
//! recomputed from the board by [`evaluate`].

use crate::error::{GameError, NoLegalMovesError, SnapshotError};
use crate::invariants::{InvariantSet, NoughtsInvariants};
use crate::rules::{apply_move, evaluate};
use crate::search::best_move;
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Starts a game: empty board, X to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Complete game state.
///
/// Deserializing replays the stored history and rejects a snapshot whose
/// board or side to move disagrees with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Player to move.
    pub(crate) to_move: Player,
    /// Indices played, in order.
    pub(crate) history: Vec<usize>,
}

impl GameState {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `moves` from the start.
    ///
    /// # Errors
    ///
    /// The first [`GameError`] any move raises.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &index in moves {
            game.play(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Derives the status from the board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Plays the side to move at `index`.
    ///
    /// On error the state is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game is decided and
    /// [`GameError::IllegalMove`] for an occupied or out-of-range square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, GameError> {
        let status = self.status();
        if status.is_terminal() {
            warn!(%status, "Move attempted after the game ended");
            return Err(GameError::GameOver { status });
        }

        self.board = apply_move(&self.board, index, self.to_move)?;
        self.history.push(index);

        let status = self.status();
        if !status.is_terminal() {
            self.to_move = self.to_move.opponent();
        }
        debug!(%status, board = %self.board.notation(), "Move accepted");

        if cfg!(debug_assertions)
            && let Err(violations) = NoughtsInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("invariant violated after move: {descriptions}");
        }

        Ok(status)
    }

    /// Asks the search for the side to move's best square, without playing it.
    ///
    /// # Errors
    ///
    /// [`NoLegalMovesError`] once the game is decided.
    pub fn computer_move(&self) -> Result<usize, NoLegalMovesError> {
        best_move(&self.board, self.to_move)
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    to_move: Player,
    history: Vec<usize>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = SnapshotError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let replayed = GameState::replay(&repr.history).map_err(SnapshotError::Replay)?;
        if replayed.board != repr.board {
            return Err(SnapshotError::BoardMismatch {
                stored: repr.board.notation(),
                replayed: replayed.board.notation(),
            });
        }
        if replayed.to_move != repr.to_move {
            return Err(SnapshotError::TurnMismatch {
                stored: repr.to_move,
                replayed: replayed.to_move,
            });
        }
        Ok(replayed)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
