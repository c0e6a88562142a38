//! Tic-tac-toe rule engine for the C practice tutorial.
//!
//! The engine is a pair of pure functions over a caller-owned [`GameState`]:
//!
//! - [`apply_move`] places the current player's mark, then settles the
//!   status (`playing`, `won` or `draw`) and winning line
//! - [`reset`] returns a fresh game
//!
//! Refused moves are absorbed and leave the state unchanged;
//! [`try_apply_move`] reports why a move was refused.
//!
//! ```
//! use ctutor_tictactoe::{apply_move, reset, GameStatus, Player};
//!
//! let mut state = reset();
//! for index in [0, 3, 1, 4, 2] {
//!     state = apply_move(state, index);
//! }
//! assert_eq!(state.status(), GameStatus::Won);
//! assert_eq!(state.winner(), Some(Player::X));
//! assert_eq!(state.winning_line(), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod render;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::{apply_move, reset, try_apply_move};
pub use position::{Position, PositionParseError};
pub use rules::{Line, Outcome, LINES};
pub use types::{Board, BoardParseError, GameState, GameStatus, Player, Square};
