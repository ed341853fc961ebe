use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::feedback::{HOVER_SCALE, ROTATION_STEP};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Feedback", inline)]
#[serde(default)]
/// Per-frame visual feedback parameters.
pub struct FeedbackOptions {
    /// Scale multiplier applied to the hovered body.
    #[schemars(title = "Hover Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub hover_scale: f32,
    /// Rotation about the vertical axis added every frame (radians).
    #[schemars(title = "Spin Step", range(min = 0.0, max = 0.5), extend("step" = 0.005))]
    pub rotation_step: f32,
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            hover_scale: HOVER_SCALE,
            rotation_step: ROTATION_STEP,
        }
    }
}
