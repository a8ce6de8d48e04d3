use alloc::vec::Vec;

use crate::StackPose;

/// Spacing of the fanned stack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackSpacing {
    /// Vertical distance between neighbouring cards.
    pub pos_y_step: f32,
    /// Rotation (degrees) between neighbouring cards.
    pub rotate_step: f32,
}

impl Default for StackSpacing {
    fn default() -> Self {
        Self {
            pos_y_step: 20.0,
            rotate_step: 2.5,
        }
    }
}

impl StackPose {
    /// Pose of entry `index` (bottom-to-top) in a window of `len` cards.
    ///
    /// The fan is symmetric around the vertical axis: the middle card is flat and the edges are
    /// tilted by `(index - (len - 1) / 2) * rotate_step`.
    pub fn at(index: usize, len: usize, spacing: StackSpacing) -> Self {
        let center = len.saturating_sub(1) as f32 / 2.0;
        Self {
            z_index: index,
            pos_y: index as f32 * spacing.pos_y_step,
            rotate: (index as f32 - center) * spacing.rotate_step,
        }
    }
}

/// Computes the poses for a window of `len` cards, bottom-to-top.
pub fn stack_layout(len: usize, spacing: StackSpacing) -> Vec<StackPose> {
    (0..len).map(|i| StackPose::at(i, len, spacing)).collect()
}
