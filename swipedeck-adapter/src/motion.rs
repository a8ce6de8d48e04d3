use std::fmt;
use std::sync::Arc;

/// Handle returned by [`MotionValue::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(f32) + Send + Sync>;

/// An observable scalar.
///
/// One motion value per drag axis is the single source of truth for "where is the card right
/// now": the render layer binds its transform to it (via `subscribe` or by reading `get` each
/// frame) and the commit pipeline samples it on release.
#[derive(Clone)]
pub struct MotionValue {
    value: f32,
    /// Units per second, derived from timestamped updates.
    velocity: f32,
    last_update_ms: Option<u64>,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl MotionValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            last_update_ms: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Sets the value without touching the tracked velocity.
    pub fn set(&mut self, value: f32) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.emit();
    }

    /// Sets the value from a timestamped input sample and updates the velocity estimate.
    pub fn set_at(&mut self, value: f32, now_ms: u64) {
        if let Some(last) = self.last_update_ms {
            let dt_ms = now_ms.saturating_sub(last);
            if dt_ms > 0 {
                self.velocity = (value - self.value) * 1000.0 / dt_ms as f32;
            }
        }
        self.last_update_ms = Some(now_ms);
        self.set(value);
    }

    /// Sets the value and resets velocity tracking, e.g. when a new card takes the top spot.
    pub fn jump(&mut self, value: f32) {
        self.velocity = 0.0;
        self.last_update_ms = None;
        self.set(value);
    }

    pub fn subscribe(&mut self, listener: impl Fn(f32) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `true` if the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&self) {
        for (_, listener) in &self.listeners {
            listener(self.value);
        }
    }
}

impl Default for MotionValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for MotionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionValue")
            .field("value", &self.value)
            .field("velocity", &self.velocity)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
