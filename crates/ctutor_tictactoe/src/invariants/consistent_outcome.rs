//! Outcome consistency: status, winner and winning line agree with the board.

use super::{Invariant, Transition};
use crate::rules::{self, LINES};
use crate::{GameState, GameStatus, Square};

/// Invariant: the reported outcome matches the board.
///
/// - moves are only applied to a game in progress
/// - `won` has a winner and one of the 8 triples, filled with the winner
/// - `draw` has a full board and no winner
/// - `playing` has neither winner nor line
pub struct ConsistentOutcomeInvariant;

impl ConsistentOutcomeInvariant {
    fn consistent(state: &GameState) -> bool {
        let board = state.board();
        match (state.status(), state.winner(), state.winning_line()) {
            (GameStatus::Won, Some(winner), Some(line)) => {
                LINES.contains(&line)
                    && line
                        .iter()
                        .all(|&i| board.get(i) == Some(Square::Occupied(winner)))
            }
            (GameStatus::Draw, None, None) => {
                rules::is_full(board) && rules::check_winner(board).is_none()
            }
            (GameStatus::Playing, None, None) => rules::outcome(board).is_none(),
            _ => false,
        }
    }
}

impl<'a> Invariant<Transition<'a>> for ConsistentOutcomeInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        t.before.status() == GameStatus::Playing && Self::consistent(t.after)
    }

    fn description() -> &'static str {
        "Status, winner and winning line agree with the board"
    }
}
