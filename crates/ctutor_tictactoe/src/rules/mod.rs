//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the engine, the invariants and `GameState::from_board` share one
//! evaluation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, LINES, Line};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a triple.
    Winner {
        /// The player holding the triple.
        player: Player,
        /// The first completed triple in enumeration order.
        line: Line,
    },
    /// The board is full and nobody completed a triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board: a win takes precedence over a full board.
///
/// Returns `None` while the game can continue.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some((player, line)) = check_winner(board) {
        return Some(Outcome::Winner { player, line });
    }
    is_full(board).then_some(Outcome::Draw)
}
