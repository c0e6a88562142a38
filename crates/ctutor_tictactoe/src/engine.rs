//! The rule engine: pure transitions over caller-owned [`GameState`].

use crate::action::MoveError;
use crate::contracts::LegalMove;
#[cfg_attr(not(debug_assertions), allow(unused_imports))]
use crate::contracts::{Contract, MoveContract};
use crate::{GameState, GameStatus};
use tracing::{debug, instrument};

/// Returns a fresh game: empty board, X to move, in progress.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

/// Applies a move at `index` (0-8) for the current player.
///
/// A refused move (game over, index out of range, occupied square) is
/// absorbed: the state comes back unchanged. Use [`try_apply_move`] to learn
/// why.
#[instrument(skip(state), fields(player = %state.current_player(), status = %state.status()))]
pub fn apply_move(state: GameState, index: usize) -> GameState {
    match try_apply_move(&state, index) {
        Ok(next) => next,
        Err(e) => {
            debug!(error = %e, "Move absorbed");
            state
        }
    }
}

/// Applies a move at `index`, returning the reason if it is refused.
///
/// On a win the mover stays current player and the first completed triple
/// (rows, columns, diagonals) is recorded. On a full board the game is a
/// draw. Otherwise the turn passes.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the game is won or drawn
/// - [`MoveError::OutOfBounds`] if `index` is not 0-8
/// - [`MoveError::SquareOccupied`] if the square is taken
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn try_apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    let pos = LegalMove::check(index, state)?;

    let mover = state.current_player();
    let mut next = state.clone();
    next.board.place(pos, mover);
    next.settle();
    if next.status() == GameStatus::Playing {
        next.current_player = mover.opponent();
    }

    check_postconditions(state, &next);
    debug!(position = %pos, status = %next.status(), "Move applied");
    Ok(next)
}

#[cfg(debug_assertions)]
fn check_postconditions(before: &GameState, after: &GameState) {
    if let Err(e) = MoveContract::post(before, after) {
        tracing::error!(error = %e, "Move broke a game invariant");
        debug_assert!(false, "{e}");
    }
}

#[cfg(not(debug_assertions))]
fn check_postconditions(_before: &GameState, _after: &GameState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_first_move_places_x_and_passes_turn() {
        let state = apply_move(reset(), 4);
        assert_eq!(state.board().get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_absorbed_move_returns_same_state() {
        let state = apply_move(reset(), 4);
        let again = apply_move(state.clone(), 4);
        assert_eq!(again, state);
        assert_eq!(apply_move(state.clone(), 9), state);
    }

    #[test]
    fn test_try_apply_move_reports_reason() {
        let state = apply_move(reset(), 0);
        assert_eq!(
            try_apply_move(&state, 0),
            Err(MoveError::SquareOccupied(crate::Position::TopLeft))
        );
        assert_eq!(try_apply_move(&state, 100), Err(MoveError::OutOfBounds(100)));
    }

    #[test]
    fn test_contract_precondition_matches_engine() {
        let state = apply_move(reset(), 0);
        for index in 0..12 {
            assert_eq!(
                MoveContract::pre(&state, &index).is_ok(),
                try_apply_move(&state, index).is_ok()
            );
        }
    }
}
