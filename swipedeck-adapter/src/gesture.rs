use swipedeck::{Direction, StackPose, WindowEntry};

use crate::{SpringConfig, Transform, drag_rotate, drag_scale};

/// Where the top card is in its drag lifecycle.
///
/// `Idle -> Dragging -> (SnappingBack -> Idle) | (Committing -> Idle on the next card)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    /// Released inside the dead zone; springing back to the origin.
    SnappingBack,
    /// Released past the dead zone; flying out. Not cancellable.
    Committing(Direction),
}

impl GesturePhase {
    /// Whether a new drag (or a programmatic swipe) may start.
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Idle | Self::SnappingBack)
    }
}

/// Tuning for the gesture-to-commit pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureOptions {
    /// Horizontal travel that must be exceeded to commit. Used for both preview and release.
    pub dead_zone: f32,
    /// Fly-out distance as a fraction of the viewport width.
    pub fly_out_ratio: f32,
    pub fly_out_spring: SpringConfig,
    pub snap_back_spring: SpringConfig,
    pub rotate: Transform<3>,
    pub scale: Transform<3>,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureOptions {
    pub fn new() -> Self {
        Self {
            dead_zone: 100.0,
            fly_out_ratio: 0.8,
            fly_out_spring: SpringConfig::FLY_OUT,
            snap_back_spring: SpringConfig::SNAP_BACK,
            rotate: drag_rotate(),
            scale: drag_scale(),
        }
    }

    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    pub fn with_fly_out_ratio(mut self, fly_out_ratio: f32) -> Self {
        self.fly_out_ratio = fly_out_ratio;
        self
    }

    pub fn with_fly_out_spring(mut self, spring: SpringConfig) -> Self {
        self.fly_out_spring = spring;
        self
    }

    pub fn with_snap_back_spring(mut self, spring: SpringConfig) -> Self {
        self.snap_back_spring = spring;
        self
    }

    /// Fly-out target for `direction`. A missing viewport degrades to a zero-distance target.
    pub fn fly_out_target(&self, direction: Direction, viewport_width: Option<f32>) -> f32 {
        direction.sign() * viewport_width.unwrap_or(0.0) * self.fly_out_ratio
    }
}

/// What a drag release did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// There was no drag in progress.
    Ignored,
    /// Released inside the dead zone; nothing was decided.
    SnapBack,
    /// Released past the dead zone; the fly-out animation has started.
    Commit(Direction),
}

/// What a `tick` advanced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// No animation running.
    Idle,
    /// An animation is in flight; the top card is at `(x, y)`.
    Animating { x: f32, y: f32 },
    /// The snap-back settled at the origin.
    SnappedBack,
    /// A fly-out settled and the decision on card `key` was committed.
    Committed { direction: Direction, key: usize },
}

/// Live drag transform of the top card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTransform {
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
    pub scale: f32,
}

impl DragTransform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        scale: 1.0,
    };
}

impl Default for DragTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Everything needed to render one card of the window.
#[derive(Clone, Copy, Debug)]
pub struct CardFrame<'a, T> {
    pub entry: WindowEntry<&'a T>,
    /// Static fanned pose.
    pub pose: StackPose,
    /// Only the top card accepts pointer input.
    pub draggable: bool,
    /// Bound to the drag motion values for the top card, identity for the rest.
    pub drag: DragTransform,
}
