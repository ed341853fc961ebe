use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::gesture::{CooldownMode, SWIPE_COOLDOWN_MS, SWIPE_MARGIN};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Hand-swipe detection parameters.
pub struct GestureOptions {
    /// Whether to start the camera and hand model at all.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Leftward fingertip travel (pixels) between frames that counts as a
    /// swipe.
    #[schemars(title = "Swipe Margin", range(min = 10.0, max = 500.0), extend("step" = 5.0))]
    pub swipe_margin: f32,
    /// Cooldown after a swipe, in milliseconds.
    #[schemars(title = "Cooldown (ms)", range(min = 0, max = 10000))]
    pub cooldown_ms: u64,
    /// Whether the cooldown blocks re-triggering.
    #[schemars(title = "Cooldown Mode")]
    pub cooldown_mode: CooldownMode,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            swipe_margin: SWIPE_MARGIN,
            cooldown_ms: SWIPE_COOLDOWN_MS,
            cooldown_mode: CooldownMode::default(),
        }
    }
}
