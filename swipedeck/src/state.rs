use crate::{Direction, SwipeTally};

/// A lightweight, serializable snapshot of a deck's bookkeeping.
///
/// Sub-renderers (background tint, score readout) read this instead of holding on to the deck
/// itself.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckSnapshot {
    pub consumed: usize,
    pub remaining: usize,
    pub total_count: Option<usize>,
    pub tally: SwipeTally,
    pub active_direction: Option<Direction>,
    pub all_consumed: bool,
}

impl DeckSnapshot {
    /// `consumed / total_count`, or `None` when the total is unknown or zero.
    pub fn progress(&self) -> Option<f32> {
        match self.total_count {
            Some(total) if total > 0 => Some((self.consumed as f32 / total as f32).min(1.0)),
            _ => None,
        }
    }
}
