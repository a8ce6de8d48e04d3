use alloc::sync::Arc;

use crate::{DeckSnapshot, StackSpacing};

/// Caller-supplied pagination trigger.
///
/// The deck invokes it fire-and-forget and observes the result only through the backing
/// collection growing (`Deck::extend_items`) and `has_more`/`total_count` updates.
pub type OnLoadMoreCallback = Arc<dyn Fn() + Send + Sync>;

/// A callback fired after a deck state update.
pub type OnChangeCallback = Arc<dyn Fn(&DeckSnapshot) + Send + Sync>;

/// Configuration for [`crate::Deck`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can update a few fields and call
/// `Deck::set_options` without reallocating closures.
pub struct DeckOptions {
    /// Number of cards materialized at once.
    pub visible_count: usize,
    /// Request more data when the unconsumed remainder drops to this value or below.
    pub prefetch_threshold: usize,
    /// Whether more pages exist upstream.
    pub has_more: bool,
    /// Known total number of items behind all pages. `None` disables completion detection.
    pub total_count: Option<usize>,
    pub on_load_more: Option<OnLoadMoreCallback>,
    pub on_change: Option<OnChangeCallback>,
    pub spacing: StackSpacing,
}

impl Clone for DeckOptions {
    fn clone(&self) -> Self {
        Self {
            visible_count: self.visible_count,
            prefetch_threshold: self.prefetch_threshold,
            has_more: self.has_more,
            total_count: self.total_count,
            on_load_more: self.on_load_more.clone(),
            on_change: self.on_change.clone(),
            spacing: self.spacing,
        }
    }
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckOptions {
    pub fn new() -> Self {
        Self {
            visible_count: 5,
            prefetch_threshold: 10,
            has_more: false,
            total_count: None,
            on_load_more: None,
            on_change: None,
            spacing: StackSpacing::default(),
        }
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    pub fn with_prefetch_threshold(mut self, prefetch_threshold: usize) -> Self {
        self.prefetch_threshold = prefetch_threshold;
        self
    }

    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    pub fn with_total_count(mut self, total_count: Option<usize>) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn with_on_load_more(
        mut self,
        on_load_more: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_load_more = on_load_more.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&DeckSnapshot) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_spacing(mut self, spacing: StackSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub(crate) fn can_load_more(&self) -> bool {
        self.has_more && self.on_load_more.is_some()
    }
}

impl core::fmt::Debug for DeckOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckOptions")
            .field("visible_count", &self.visible_count)
            .field("prefetch_threshold", &self.prefetch_threshold)
            .field("has_more", &self.has_more)
            .field("total_count", &self.total_count)
            .field("spacing", &self.spacing)
            .finish_non_exhaustive()
    }
}
