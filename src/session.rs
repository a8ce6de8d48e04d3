use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use swipedeck::{Deck, DeckSnapshot, Direction};
use swipedeck_adapter::{CardFrame, ReleaseOutcome, SwipeController, TickOutcome};

use crate::{
    BackgroundTint, FetchError, PageSource, PagedFeed, ScoreReadout, SessionConfig,
    Subscription, Unsubscriber,
};

/// A subscription review: the paged feed, the swipe controller and the unsubscribe hook wired
/// together.
///
/// The deck asks for more data through a flag that [`ReviewSession::pump`] services, so the
/// deck never waits on a fetch; it only sees the backing collection grow. The very first page
/// is requested the same way: an empty deck is below any prefetch threshold.
pub struct ReviewSession<S> {
    feed: PagedFeed<S>,
    controller: SwipeController<Subscription>,
    load_requested: Arc<AtomicBool>,
    failed_unsubscribes: Arc<AtomicUsize>,
}

impl<S: PageSource<Subscription>> ReviewSession<S> {
    pub fn new(source: S, unsubscriber: Arc<dyn Unsubscriber>, config: &SessionConfig) -> Self {
        let load_requested = Arc::new(AtomicBool::new(false));
        let failed_unsubscribes = Arc::new(AtomicUsize::new(0));

        let flag = Arc::clone(&load_requested);
        let deck_options = config
            .deck_options()
            .with_has_more(true)
            .with_on_load_more(Some(move || flag.store(true, Ordering::Release)));
        let deck = Deck::new(Vec::new(), deck_options);

        let failures = Arc::clone(&failed_unsubscribes);
        let mut controller = SwipeController::from_deck(deck, config.gesture_options())
            .with_on_swipe_left(Some(move |subscription: &Subscription| {
                unsubscribe(unsubscriber.as_ref(), subscription, &failures);
            }));
        controller.set_viewport_width(config.viewport_width);

        Self {
            feed: PagedFeed::new(source),
            controller,
            load_requested,
            failed_unsubscribes,
        }
    }

    /// Services an outstanding "load more" request, if any.
    ///
    /// Returns the number of items appended to the deck. A failed fetch is returned to the
    /// caller; the deck's prefetch latch stays set, so no new request is raised until the
    /// remaining count rises above the threshold again.
    pub fn pump(&mut self) -> Result<usize, FetchError> {
        if !self.load_requested.swap(false, Ordering::AcqRel) {
            return Ok(0);
        }

        let items = match self.feed.load_more() {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(%error, "failed to fetch subscriptions");
                return Err(error);
            }
        };

        let appended = items.len();
        let has_more = self.feed.has_more();
        let total_count = self.feed.total_count();
        self.controller.deck_mut().batch_update(|deck| {
            deck.extend_items(items);
            deck.set_total_count(total_count);
            deck.set_has_more(has_more);
        });
        Ok(appended)
    }

    /// Whether the deck has asked for data that `pump` has not fetched yet.
    pub fn is_load_requested(&self) -> bool {
        self.load_requested.load(Ordering::Acquire)
    }

    pub fn feed(&self) -> &PagedFeed<S> {
        &self.feed
    }
}

impl<S> ReviewSession<S> {
    pub fn controller(&self) -> &SwipeController<Subscription> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController<Subscription> {
        &mut self.controller
    }

    pub fn deck(&self) -> &Deck<Subscription> {
        self.controller.deck()
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        self.controller.deck().snapshot()
    }

    pub fn on_drag_start(&mut self) -> bool {
        self.controller.on_drag_start()
    }

    pub fn on_drag(&mut self, dx: f32, dy: f32, now_ms: u64) {
        self.controller.on_drag(dx, dy, now_ms);
    }

    pub fn on_drag_end(&mut self, now_ms: u64) -> ReleaseOutcome {
        self.controller.on_drag_end(now_ms)
    }

    pub fn swipe(&mut self, direction: Direction, now_ms: u64) -> bool {
        self.controller.swipe(direction, now_ms)
    }

    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        self.controller.tick(now_ms)
    }

    pub fn frames(&self) -> Vec<CardFrame<'_, Subscription>> {
        self.controller.frames()
    }

    pub fn background_tint(&self) -> BackgroundTint {
        BackgroundTint::from_snapshot(&self.snapshot())
    }

    pub fn score(&self) -> Option<ScoreReadout> {
        ScoreReadout::from_snapshot(&self.snapshot())
    }

    /// Unsubscribe requests that failed. The cards stay decided regardless.
    pub fn failed_unsubscribes(&self) -> usize {
        self.failed_unsubscribes.load(Ordering::Relaxed)
    }
}

fn unsubscribe(unsubscriber: &dyn Unsubscriber, subscription: &Subscription, failures: &AtomicUsize) {
    let Some(id) = subscription.id.as_deref() else {
        tracing::debug!(title = ?subscription.title, "subscription has no id; nothing to delete");
        return;
    };
    match unsubscriber.unsubscribe(id) {
        Ok(()) => tracing::info!(id, "unsubscribed"),
        Err(error) => {
            failures.fetch_add(1, Ordering::Relaxed);
            tracing::error!(id, %error, "failed to delete subscription");
        }
    }
}
