//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::{Invariant, Transition};
use crate::GameStatus;

/// Invariant: Players alternate turns.
///
/// While the game continues the player to move flips. A move that ends the
/// game leaves the mover as current player.
pub struct AlternatingTurnInvariant;

impl<'a> Invariant<Transition<'a>> for AlternatingTurnInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let mover = t.before.current_player();
        match t.after.status() {
            GameStatus::Playing => t.after.current_player() == mover.opponent(),
            GameStatus::Won | GameStatus::Draw => t.after.current_player() == mover,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
