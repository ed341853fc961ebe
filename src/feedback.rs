//! Per-frame visual feedback: hover scale and constant spin.
//!
//! The adapter is a pure function of the hover state. It never reads back
//! transforms; it only issues requests to whatever owns the presentation
//! objects.

use crate::input::HoverState;
use crate::options::FeedbackOptions;
use crate::target::Target;

/// Scale applied to the hovered body, relative to baseline.
pub const HOVER_SCALE: f32 = 1.2;
/// Scale of a body that is not hovered.
pub const BASE_SCALE: f32 = 1.0;
/// Rotation about the vertical axis added each frame, in radians.
pub const ROTATION_STEP: f32 = 0.05;

/// Transform mutations on the rendered bodies.
pub trait TargetTransforms {
    /// Set the uniform scale of a body (1.0 = baseline).
    fn set_scale(&mut self, target: Target, scale: f32);
    /// Add `delta` radians of rotation about the vertical axis.
    fn rotate(&mut self, target: Target, delta: f32);
}

/// Turns hover state into scale/rotation requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackAdapter {
    hover_scale: f32,
    rotation_step: f32,
}

impl FeedbackAdapter {
    /// Build from options.
    #[must_use]
    pub fn new(options: &FeedbackOptions) -> Self {
        Self {
            hover_scale: options.hover_scale,
            rotation_step: options.rotation_step,
        }
    }

    /// Scale a target should have under `hover`.
    #[must_use]
    pub fn scale_for(&self, hover: HoverState, target: Target) -> f32 {
        if hover.is_over(target) {
            self.hover_scale
        } else {
            BASE_SCALE
        }
    }

    /// Issue this frame's requests for every target.
    pub fn apply(&self, hover: HoverState, transforms: &mut dyn TargetTransforms) {
        for target in Target::ALL {
            transforms.set_scale(target, self.scale_for(hover, target));
            transforms.rotate(target, self.rotation_step);
        }
    }
}

impl Default for FeedbackAdapter {
    fn default() -> Self {
        Self::new(&FeedbackOptions::default())
    }
}
