use std::fmt;
use std::sync::Arc;

use swipedeck::{Deck, DeckOptions, Direction};

use crate::{
    CardFrame, DragTransform, GestureOptions, GesturePhase, MotionValue, ReleaseOutcome, Spring,
    TickOutcome,
};

/// Per-direction side-effect hook, invoked with the decided item after its fly-out settled and
/// the deck advanced.
pub type SwipeHook<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A framework-neutral controller that wraps a [`swipedeck::Deck`] and turns drag gestures into
/// committed decisions.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag_start` / `on_drag` / `on_drag_end` when pointer events occur
/// - `tick(now_ms)` each frame/timer tick (for fly-out and snap-back springs)
///
/// Within one commit the order is fixed: the fly-out settles, then the deck advances, then the
/// tally is updated, then the matching hook runs, then the drag offsets reset for the next card.
pub struct SwipeController<T> {
    deck: Deck<T>,
    options: GestureOptions,
    viewport_width: Option<f32>,
    x: MotionValue,
    y: MotionValue,
    phase: GesturePhase,
    spring_x: Option<Spring>,
    spring_y: Option<Spring>,
    /// Card position when the current drag started.
    drag_origin: (f32, f32),
    on_swipe_left: Option<SwipeHook<T>>,
    on_swipe_right: Option<SwipeHook<T>>,
}

impl<T> SwipeController<T> {
    pub fn new(items: Vec<T>, deck_options: DeckOptions, options: GestureOptions) -> Self {
        Self::from_deck(Deck::new(items, deck_options), options)
    }

    pub fn from_deck(deck: Deck<T>, options: GestureOptions) -> Self {
        Self {
            deck,
            options,
            viewport_width: None,
            x: MotionValue::default(),
            y: MotionValue::default(),
            phase: GesturePhase::Idle,
            spring_x: None,
            spring_y: None,
            drag_origin: (0.0, 0.0),
            on_swipe_left: None,
            on_swipe_right: None,
        }
    }

    pub fn deck(&self) -> &Deck<T> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck<T> {
        &mut self.deck
    }

    pub fn into_deck(self) -> Deck<T> {
        self.deck
    }

    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GestureOptions) {
        self.options = options;
    }

    /// Width of the display surface. `None` (headless) makes fly-outs zero-distance.
    pub fn set_viewport_width(&mut self, viewport_width: Option<f32>) {
        self.viewport_width = viewport_width;
    }

    pub fn viewport_width(&self) -> Option<f32> {
        self.viewport_width
    }

    pub fn set_on_swipe_left(&mut self, hook: Option<impl Fn(&T) + Send + Sync + 'static>) {
        self.on_swipe_left = hook.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_swipe_right(&mut self, hook: Option<impl Fn(&T) + Send + Sync + 'static>) {
        self.on_swipe_right = hook.map(|f| Arc::new(f) as _);
    }

    pub fn with_on_swipe_left(mut self, hook: Option<impl Fn(&T) + Send + Sync + 'static>) -> Self {
        self.set_on_swipe_left(hook);
        self
    }

    pub fn with_on_swipe_right(
        mut self,
        hook: Option<impl Fn(&T) + Send + Sync + 'static>,
    ) -> Self {
        self.set_on_swipe_right(hook);
        self
    }

    pub fn x(&self) -> &MotionValue {
        &self.x
    }

    pub fn y(&self) -> &MotionValue {
        &self.y
    }

    /// Mutable access for subscribing render-layer listeners.
    pub fn x_mut(&mut self) -> &mut MotionValue {
        &mut self.x
    }

    pub fn y_mut(&mut self) -> &mut MotionValue {
        &mut self.y
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::SnappingBack | GesturePhase::Committing(_)
        )
    }

    /// The live transform of the top card, derived from the drag motion values.
    pub fn drag_transform(&self) -> DragTransform {
        let x = self.x.get();
        let y = self.y.get();
        DragTransform {
            x,
            y,
            rotate: self.options.rotate.map(x),
            scale: self.options.scale.map(y),
        }
    }

    /// Iterates over the render frames bottom-to-top without allocations.
    ///
    /// Yields nothing once every card is decided; the completion summary replaces the stack.
    pub fn for_each_frame<'a>(&'a self, mut f: impl FnMut(CardFrame<'a, T>)) {
        if self.deck.is_all_consumed() {
            return;
        }
        let len = self.deck.window_len();
        let spacing = self.deck.options().spacing;
        let live = self.drag_transform();
        let accepts_drag = !matches!(self.phase, GesturePhase::Committing(_));
        let mut position = 0usize;
        self.deck.for_each_window_entry(|entry| {
            let is_top = position + 1 == len;
            f(CardFrame {
                entry,
                pose: swipedeck::StackPose::at(position, len, spacing),
                draggable: is_top && accepts_drag,
                drag: if is_top { live } else { DragTransform::IDENTITY },
            });
            position += 1;
        });
    }

    pub fn frames(&self) -> Vec<CardFrame<'_, T>> {
        let mut out = Vec::new();
        self.for_each_frame(|frame| out.push(frame));
        out
    }

    /// Starts a drag on the top card.
    ///
    /// Grabbing a card that is springing back takes over from its current position. Returns
    /// `false` while a commit is in flight, when there is no card, or once the deck is complete.
    pub fn on_drag_start(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.drag_origin = (self.x.get(), self.y.get());
        self.spring_x = None;
        self.spring_y = None;
        self.phase = GesturePhase::Dragging;
        self.deck.set_active_direction(None);
        atrace!("drag start");
        true
    }

    /// Feeds the pointer displacement since drag start and refreshes the direction preview.
    pub fn on_drag(&mut self, dx: f32, dy: f32, now_ms: u64) {
        if self.phase != GesturePhase::Dragging {
            return;
        }
        let (origin_x, origin_y) = self.drag_origin;
        self.x.set_at(origin_x + dx, now_ms);
        self.y.set_at(origin_y + dy, now_ms);
        let preview = Direction::classify(self.x.get(), self.options.dead_zone);
        self.deck.set_active_direction(preview);
    }

    /// Ends the drag and either snaps back or begins committing.
    pub fn on_drag_end(&mut self, now_ms: u64) -> ReleaseOutcome {
        if self.phase != GesturePhase::Dragging {
            return ReleaseOutcome::Ignored;
        }
        self.deck.set_active_direction(None);

        match Direction::classify(self.x.get(), self.options.dead_zone) {
            Some(direction) => {
                self.begin_commit(direction, now_ms);
                ReleaseOutcome::Commit(direction)
            }
            None => {
                atrace!(x = self.x.get(), "release inside dead zone");
                self.spring_x = Some(Spring::new(
                    self.x.get(),
                    0.0,
                    self.x.velocity(),
                    now_ms,
                    self.options.snap_back_spring,
                ));
                self.spring_y = Some(Spring::new(
                    self.y.get(),
                    0.0,
                    self.y.velocity(),
                    now_ms,
                    self.options.snap_back_spring,
                ));
                self.phase = GesturePhase::SnappingBack;
                ReleaseOutcome::SnapBack
            }
        }
    }

    /// Commits a decision on the top card without a drag (e.g. a button or key press).
    ///
    /// Runs the same fly-out and commit sequence as a released drag. Returns `false` while
    /// another commit is in flight, during a drag, when there is no card, or once the deck is
    /// complete.
    pub fn swipe(&mut self, direction: Direction, now_ms: u64) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.begin_commit(direction, now_ms);
        true
    }

    fn accepts_input(&self) -> bool {
        self.phase.accepts_input() && !self.deck.is_all_consumed() && self.deck.top().is_some()
    }

    fn begin_commit(&mut self, direction: Direction, now_ms: u64) {
        let target = self
            .options
            .fly_out_target(direction, self.viewport_width);
        adebug!(
            ?direction,
            from = self.x.get(),
            target,
            key = self.deck.consumed(),
            "commit start"
        );
        self.spring_x = Some(Spring::new(
            self.x.get(),
            target,
            self.x.velocity(),
            now_ms,
            self.options.fly_out_spring,
        ));
        self.spring_y = None;
        self.phase = GesturePhase::Committing(direction);
    }

    /// Advances running animations.
    ///
    /// Deck state is only mutated here, after a fly-out has fully settled.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        match self.phase {
            GesturePhase::Idle | GesturePhase::Dragging => TickOutcome::Idle,
            GesturePhase::SnappingBack => {
                let mut done = true;
                if let Some(spring) = self.spring_x {
                    self.x.set(spring.sample(now_ms));
                    done &= spring.is_done(now_ms);
                }
                if let Some(spring) = self.spring_y {
                    self.y.set(spring.sample(now_ms));
                    done &= spring.is_done(now_ms);
                }
                if !done {
                    return TickOutcome::Animating {
                        x: self.x.get(),
                        y: self.y.get(),
                    };
                }
                self.spring_x = None;
                self.spring_y = None;
                self.x.jump(0.0);
                self.y.jump(0.0);
                self.phase = GesturePhase::Idle;
                atrace!("snap-back settled");
                TickOutcome::SnappedBack
            }
            GesturePhase::Committing(direction) => {
                if let Some(spring) = self.spring_x {
                    self.x.set(spring.sample(now_ms));
                    if !spring.is_done(now_ms) {
                        return TickOutcome::Animating {
                            x: self.x.get(),
                            y: self.y.get(),
                        };
                    }
                }
                self.spring_x = None;
                match self.finish_commit(direction) {
                    Some(key) => TickOutcome::Committed { direction, key },
                    None => TickOutcome::Idle,
                }
            }
        }
    }

    fn finish_commit(&mut self, direction: Direction) -> Option<usize> {
        let committed = self.deck.record_decision(direction);
        match committed {
            Some(key) => {
                adebug!(?direction, key, "commit settled");
                let hook = match direction {
                    Direction::Left => self.on_swipe_left.as_ref(),
                    Direction::Right => self.on_swipe_right.as_ref(),
                };
                match (hook, self.deck.item(key)) {
                    (Some(hook), Some(item)) => {
                        atrace!(?direction, key, "dispatching swipe hook");
                        hook(item);
                    }
                    (Some(_), None) => {
                        awarn!(key, "decided item is no longer loaded; skipping swipe hook");
                    }
                    (None, _) => {}
                }
            }
            None => {
                awarn!(
                    ?direction,
                    "no card left to commit; backing collection changed mid-animation"
                );
            }
        }

        self.x.jump(0.0);
        self.y.jump(0.0);
        self.phase = GesturePhase::Idle;
        committed
    }
}

impl<T> fmt::Debug for SwipeController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeController")
            .field("options", &self.options)
            .field("viewport_width", &self.viewport_width)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("phase", &self.phase)
            .field("consumed", &self.deck.consumed())
            .field("tally", &self.deck.tally())
            .finish_non_exhaustive()
    }
}
