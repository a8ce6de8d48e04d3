use alloc::vec::Vec;
use core::cell::Cell;

use crate::latch::{PrefetchDecision, PrefetchLatch};
use crate::{
    DeckOptions, DeckSnapshot, Direction, StackPose, SwipeTally, WindowEntry, stack_layout,
};

/// A headless stacked-card deck.
///
/// The deck owns a read-mostly view of the backing collection and the per-instance bookkeeping:
/// how many cards were decided on, the left/right tally, the live drag preview, the completion
/// latch and the prefetch latch. It holds no UI objects; the adapter layer feeds it gestures and
/// reads back the window and stack layout.
///
/// Every mutation re-runs the deck's effects (completion detection and the prefetch policy),
/// so callers never have to remember to "re-render".
#[derive(Clone, Debug)]
pub struct Deck<T> {
    options: DeckOptions,
    items: Vec<T>,
    consumed: usize,
    tally: SwipeTally,
    active_direction: Option<Direction>,
    all_consumed: bool,
    prefetch: PrefetchLatch,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T> Deck<T> {
    /// Creates a deck over an initial backing collection.
    ///
    /// Effects run immediately, so an initially short collection triggers `on_load_more` right
    /// away.
    pub fn new(items: Vec<T>, options: DeckOptions) -> Self {
        ddebug!(
            items = items.len(),
            visible_count = options.visible_count,
            prefetch_threshold = options.prefetch_threshold,
            has_more = options.has_more,
            "Deck::new"
        );
        let mut deck = Self {
            options,
            items,
            consumed: 0,
            tally: SwipeTally::default(),
            active_direction: None,
            all_consumed: false,
            prefetch: PrefetchLatch::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        deck.run_effects();
        deck
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DeckOptions) {
        self.options = options;
        dtrace!(
            visible_count = self.options.visible_count,
            prefetch_threshold = self.options.prefetch_threshold,
            has_more = self.options.has_more,
            "Deck::set_options"
        );
        self.changed();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut DeckOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_visible_count(&mut self, visible_count: usize) {
        if self.options.visible_count == visible_count {
            return;
        }
        self.options.visible_count = visible_count;
        self.changed();
    }

    pub fn set_prefetch_threshold(&mut self, prefetch_threshold: usize) {
        if self.options.prefetch_threshold == prefetch_threshold {
            return;
        }
        self.options.prefetch_threshold = prefetch_threshold;
        self.changed();
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        if self.options.has_more == has_more {
            return;
        }
        self.options.has_more = has_more;
        self.changed();
    }

    pub fn set_total_count(&mut self, total_count: Option<usize>) {
        if self.options.total_count == total_count {
            return;
        }
        self.options.total_count = total_count;
        self.changed();
    }

    pub fn set_on_load_more(&mut self, on_load_more: Option<impl Fn() + Send + Sync + 'static>) {
        self.options.on_load_more = on_load_more.map(|f| alloc::sync::Arc::new(f) as _);
        self.changed();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&DeckSnapshot) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at an absolute index (a window key).
    pub fn item(&self, key: usize) -> Option<&T> {
        self.items.get(key)
    }

    /// Appends newly fetched items (a page) to the backing collection.
    pub fn extend_items(&mut self, items: impl IntoIterator<Item = T>) {
        let before = self.items.len();
        self.items.extend(items);
        if self.items.len() == before {
            return;
        }
        dtrace!(
            appended = self.items.len() - before,
            len = self.items.len(),
            "Deck::extend_items"
        );
        self.changed();
    }

    /// Replaces the backing collection wholesale.
    ///
    /// The consumed count is kept, clamped to the new length. The tally and the completion
    /// latch are left untouched.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.consumed > self.items.len() {
            dwarn!(
                consumed = self.consumed,
                len = self.items.len(),
                "Deck::set_items: backing collection shrank below consumed count; clamping"
            );
            self.consumed = self.items.len();
        }
        self.changed();
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Unconsumed items currently loaded.
    pub fn remaining_count(&self) -> usize {
        self.items.len().saturating_sub(self.consumed)
    }

    pub fn tally(&self) -> SwipeTally {
        self.tally
    }

    pub fn total_count(&self) -> Option<usize> {
        self.options.total_count
    }

    pub fn has_more(&self) -> bool {
        self.options.has_more
    }

    pub fn is_all_consumed(&self) -> bool {
        self.all_consumed
    }

    /// Whether a "load more" request is outstanding.
    pub fn is_prefetch_pending(&self) -> bool {
        self.prefetch.is_pending()
    }

    pub fn active_direction(&self) -> Option<Direction> {
        self.active_direction
    }

    /// Updates the drag preview. This is never a commit.
    pub fn set_active_direction(&mut self, direction: Option<Direction>) {
        if self.active_direction == direction {
            return;
        }
        self.active_direction = direction;
        self.notify();
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            consumed: self.consumed,
            remaining: self.remaining_count(),
            total_count: self.options.total_count,
            tally: self.tally,
            active_direction: self.active_direction,
            all_consumed: self.all_consumed,
        }
    }

    /// Number of entries in the visible window: `min(visible_count, remaining)`.
    pub fn window_len(&self) -> usize {
        self.options.visible_count.min(self.remaining_count())
    }

    /// Iterates over the window bottom-to-top without allocations.
    ///
    /// The last entry visited is the interactive top card.
    pub fn for_each_window_entry<'a>(&'a self, mut f: impl FnMut(WindowEntry<&'a T>)) {
        let len = self.window_len();
        for offset in (0..len).rev() {
            let key = self.consumed + offset;
            f(WindowEntry {
                value: &self.items[key],
                key,
            });
        }
    }

    /// The window bottom-to-top (index 0 is the card reached last, the last index is the top).
    pub fn window(&self) -> Vec<WindowEntry<&T>> {
        let mut out = Vec::with_capacity(self.window_len());
        self.for_each_window_entry(|entry| out.push(entry));
        out
    }

    /// Stack poses matching [`Deck::window`] index for index.
    pub fn layout(&self) -> Vec<StackPose> {
        stack_layout(self.window_len(), self.options.spacing)
    }

    /// Pose of the window entry at `position` (bottom-to-top).
    pub fn pose_at(&self, position: usize) -> Option<StackPose> {
        let len = self.window_len();
        (position < len).then(|| StackPose::at(position, len, self.options.spacing))
    }

    /// The interactive top card.
    pub fn top(&self) -> Option<WindowEntry<&T>> {
        let key = self.consumed;
        self.items.get(key).map(|value| WindowEntry { value, key })
    }

    pub fn is_top(&self, key: usize) -> bool {
        key == self.consumed && key < self.items.len()
    }

    /// Advances the window by one card, clamped to the backing collection.
    ///
    /// Returns `false` (and changes nothing) when every loaded item is already consumed.
    pub fn consume_card(&mut self) -> bool {
        let next = (self.consumed + 1).min(self.items.len());
        if next == self.consumed {
            return false;
        }
        self.consumed = next;
        dtrace!(consumed = self.consumed, "Deck::consume_card");
        self.changed();
        true
    }

    /// Increments exactly the counter named by `direction`.
    pub fn update_swipe_counts(&mut self, direction: Direction) {
        self.tally.record(direction);
        dtrace!(
            ?direction,
            left = self.tally.left,
            right = self.tally.right,
            "Deck::update_swipe_counts"
        );
        self.notify();
    }

    /// Commits a decision on the top card: advances the window, then updates the tally.
    ///
    /// Returns the key of the decided card, or `None` if there was no card to decide on (in
    /// which case nothing changes).
    pub fn record_decision(&mut self, direction: Direction) -> Option<usize> {
        let key = self.consumed;
        let mut advanced = false;
        self.batch_update(|deck| {
            advanced = deck.consume_card();
            if advanced {
                deck.update_swipe_counts(direction);
            }
        });
        advanced.then_some(key)
    }

    /// Re-runs the deck's effects without changing any input.
    ///
    /// Effects are idempotent: with unchanged inputs this never triggers a second load.
    pub fn refresh(&mut self) {
        self.run_effects();
    }

    fn changed(&mut self) {
        self.run_effects();
        self.notify();
    }

    fn run_effects(&mut self) {
        self.update_all_consumed();
        self.update_prefetch();
    }

    fn update_all_consumed(&mut self) {
        if self.all_consumed {
            return;
        }
        let Some(total) = self.options.total_count else {
            return;
        };
        if self.consumed >= total {
            self.all_consumed = true;
            ddebug!(consumed = self.consumed, total, "Deck: all cards consumed");
        }
    }

    fn update_prefetch(&mut self) {
        let was_pending = self.prefetch.is_pending();
        let remaining = self.remaining_count();
        let decision = self.prefetch.evaluate(
            self.options.can_load_more(),
            remaining,
            self.options.prefetch_threshold,
        );

        match decision {
            PrefetchDecision::Trigger => {
                ddebug!(
                    remaining,
                    threshold = self.options.prefetch_threshold,
                    "Deck: requesting more items"
                );
                if let Some(on_load_more) = self.options.on_load_more.clone() {
                    on_load_more();
                }
            }
            PrefetchDecision::Pending => {}
            PrefetchDecision::Idle => {
                if was_pending {
                    dtrace!(remaining, "Deck: prefetch latch cleared");
                }
            }
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.snapshot());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}
