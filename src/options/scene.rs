use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::target::Target;

/// Placement and hit radius of one body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct BodyOptions {
    /// World-space center.
    pub position: [f32; 3],
    /// Sphere radius at baseline scale.
    #[schemars(range(min = 0.05, max = 5.0))]
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Layout of the three selectable bodies.
pub struct SceneOptions {
    /// Earth, above center.
    pub earth: BodyOptions,
    /// Mars, to the left.
    pub mars: BodyOptions,
    /// Moon, to the right.
    pub moon: BodyOptions,
}

impl SceneOptions {
    /// Body layout for a target.
    #[must_use]
    pub fn body(&self, target: Target) -> BodyOptions {
        match target {
            Target::Earth => self.earth,
            Target::Mars => self.mars,
            Target::Moon => self.moon,
        }
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            earth: BodyOptions {
                position: [0.0, 1.0, 0.0],
                radius: 0.8,
            },
            mars: BodyOptions {
                position: [-3.0, 0.0, 0.0],
                radius: 0.5,
            },
            moon: BodyOptions {
                position: [3.0, 0.0, 0.0],
                radius: 0.5,
            },
        }
    }
}
