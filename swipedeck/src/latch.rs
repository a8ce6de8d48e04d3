/// What the prefetch effect decided on one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefetchDecision {
    /// `on_load_more` must be invoked now (the latch was just set).
    Trigger,
    /// Below threshold, but a request is already outstanding.
    Pending,
    /// Nothing to do; the latch is clear.
    Idle,
}

/// One-shot latch that makes the "load more" trigger edge-triggered.
///
/// The latch is set when the remaining count first crosses the threshold and stays set until the
/// remaining count rises above the threshold again (or pagination is disabled). A failed fetch
/// does not clear it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefetchLatch {
    pending: bool,
}

impl PrefetchLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = false;
    }

    /// Runs one evaluation of the prefetch effect.
    ///
    /// `can_load` is `has_more && on_load_more.is_some()`.
    pub fn evaluate(&mut self, can_load: bool, remaining: usize, threshold: usize) -> PrefetchDecision {
        if !can_load {
            self.pending = false;
            return PrefetchDecision::Idle;
        }

        if remaining <= threshold {
            if self.pending {
                return PrefetchDecision::Pending;
            }
            self.pending = true;
            return PrefetchDecision::Trigger;
        }

        self.pending = false;
        PrefetchDecision::Idle
    }
}
