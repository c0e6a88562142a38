//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. The engine checks preconditions on every move and
//! postconditions in debug builds.

use crate::action::MoveError;
use crate::invariants::{InvariantSet, TicTacToeInvariants, Transition};
use crate::{GameState, GameStatus, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameActive;

impl GameActive {
    /// Rejects moves on a won or drawn game.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.status() {
            GameStatus::Playing => Ok(()),
            GameStatus::Won | GameStatus::Draw => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: The index must name a square.
pub struct InBounds;

impl InBounds {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is active, the index is on the board and
/// the square is empty. Checked in that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and returns its position.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, MoveError> {
        GameActive::check(state)?;
        let pos = InBounds::check(index)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move index to a [`GameState`].
///
/// Preconditions:
/// - Game is in progress
/// - Index is 0-8
/// - Square is empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - Status, winner and line agree with the board
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(&Transition::new(before, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
