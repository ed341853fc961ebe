use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Fixed viewing camera used to cast hover rays.
pub struct CameraOptions {
    /// Eye position in world space.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Look-at point in world space.
    #[schemars(skip)]
    pub look_at: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            look_at: [0.0, 0.0, 0.0],
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
