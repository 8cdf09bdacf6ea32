//! Match judge - classifies a two-card selection

use crate::board::{adjacent, Board};

/// Outcome of selecting a second slot while a first one is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Same slot picked twice: deselect, nothing scored.
    Reselect,
    /// Equal cards in adjacent slots.
    Match,
    /// Different cards, or equal cards that do not touch.
    Mismatch,
}

/// Judge the pair `(first, second)`.
///
/// Returns `None` when either slot is empty or out of range; such selections
/// are ignored rather than judged.
pub fn judge(board: &Board, first: usize, second: usize) -> Option<MatchOutcome> {
    let a = board.card(first)?;
    let b = board.card(second)?;

    if first == second {
        return Some(MatchOutcome::Reselect);
    }

    if a.same_kind(&b) && adjacent(first, second) {
        Some(MatchOutcome::Match)
    } else {
        Some(MatchOutcome::Mismatch)
    }
}
