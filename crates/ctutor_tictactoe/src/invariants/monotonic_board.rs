//! Monotonic board invariant: squares never change once set.

use super::{Invariant, Transition};
use crate::Square;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Every square occupied before the move is unchanged after it, and exactly
/// one empty square now holds the mover's mark.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let mover = Square::Occupied(t.before.current_player());
        let mut placed = 0;

        let pairs = t.before.board().squares().iter().zip(t.after.board().squares());
        for (before, after) in pairs {
            match (before, after) {
                (Square::Empty, Square::Empty) => {}
                (Square::Empty, now) if *now == mover => placed += 1,
                (Square::Empty, _) => return false,
                (was, now) if was != now => return false,
                _ => {}
            }
        }

        placed == 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
