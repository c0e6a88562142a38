//! Non-interactive play: apply a list of moves and report the result.

use ctutor_tictactoe::{try_apply_move, GameState, Move, Position};
use serde::Serialize;
use tracing::{instrument, warn};

/// Outcome of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    /// State after the last move.
    pub state: GameState,
    /// Moves the engine accepted, in order.
    pub history: Vec<Move>,
    /// Number of moves the engine absorbed.
    pub absorbed: usize,
}

impl ReplayReport {
    /// Board followed by the status line.
    pub fn render_text(&self) -> String {
        let mut out = self.state.board().display();
        out.push_str("\n\n");
        out.push_str(&self.state.status_message());
        if self.absorbed > 0 {
            out.push_str(&format!("\n({} move(s) ignored)", self.absorbed));
        }
        out
    }
}

/// Applies `moves` in order starting from `start`.
///
/// Refused moves are skipped with a warning, exactly as a click on a taken
/// square or a finished board is ignored by the preview pane.
#[instrument(skip(start))]
pub fn replay(start: GameState, moves: &[Position]) -> ReplayReport {
    let mut state = start;
    let mut history = Vec::new();
    let mut absorbed = 0;

    for &pos in moves {
        let player = state.current_player();
        match try_apply_move(&state, pos.to_index()) {
            Ok(next) => {
                state = next;
                history.push(Move::new(player, pos));
            }
            Err(e) => {
                warn!(position = %pos, error = %e, "Move ignored");
                absorbed += 1;
            }
        }
    }

    ReplayReport {
        state,
        history,
        absorbed,
    }
}
