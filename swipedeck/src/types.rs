/// The side a card was (or is about to be) thrown to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Classifies a horizontal drag displacement against a dead zone.
    ///
    /// Returns `Right` when `dx > dead_zone`, `Left` when `dx < -dead_zone`, and `None`
    /// otherwise. The same function drives the live preview and the release decision, so the
    /// two can never disagree.
    pub fn classify(dx: f32, dead_zone: f32) -> Option<Self> {
        if dx > dead_zone {
            Some(Self::Right)
        } else if dx < -dead_zone {
            Some(Self::Left)
        } else {
            None
        }
    }

    /// `-1.0` for `Left`, `1.0` for `Right`.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Cumulative decision counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeTally {
    pub left: usize,
    pub right: usize,
}

impl SwipeTally {
    /// Increments exactly the counter named by `direction`.
    pub fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left = self.left.saturating_add(1),
            Direction::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, direction: Direction) -> usize {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn total(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Share of left swipes in `[0, 1]`; an even split before the first swipe.
    pub fn left_ratio(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.5;
        }
        self.left as f32 / total as f32
    }

    /// Share of right swipes in `[0, 1]`; an even split before the first swipe.
    pub fn right_ratio(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.5;
        }
        self.right as f32 / total as f32
    }
}

/// One materialized card of the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowEntry<T> {
    pub value: T,
    /// Absolute index in the backing collection (`consumed + offset`), stable across window
    /// shifts so it can be used as a render key.
    pub key: usize,
}

/// Static fanned pose of a card inside the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackPose {
    /// Bottom-to-top stacking order (`0` is the bottom card).
    pub z_index: usize,
    /// Vertical offset in layout units.
    pub pos_y: f32,
    /// Fan rotation in degrees.
    pub rotate: f32,
}
