//! Presentation objects for the three bodies.
//!
//! `SceneBodies` stands in for the rendering collaborator: it owns each
//! body's placement and transform, answers hover rays, and accepts the
//! feedback adapter's scale/rotation requests. A body that has not been
//! loaded yet is simply absent, so rays report no hit for it and
//! transform requests for it are dropped.

use glam::Vec3;

use crate::feedback::TargetTransforms;
use crate::options::SceneOptions;
use crate::picking::{ray_sphere_intersect, Hit, HitTester, Ray};
use crate::target::{PerTarget, Target};

/// Mutable transform of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// Uniform scale, 1.0 = baseline.
    pub scale: f32,
    /// Accumulated rotation about the vertical axis, radians.
    pub rotation_y: f32,
}

impl Default for BodyTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_y: 0.0,
        }
    }
}

/// A loaded body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// World-space center.
    pub center: Vec3,
    /// Radius at baseline scale. Hit tests always use this, so hover
    /// never depends on the scale feedback applied last frame.
    pub radius: f32,
    /// Current transform.
    pub transform: BodyTransform,
}

/// The selectable bodies, each possibly not loaded yet.
#[derive(Debug, Clone, Default)]
pub struct SceneBodies {
    bodies: PerTarget<Option<Body>>,
}

impl SceneBodies {
    /// No bodies loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All bodies loaded at the configured layout.
    #[must_use]
    pub fn from_options(options: &SceneOptions) -> Self {
        Self {
            bodies: PerTarget::from_fn(|target| {
                let body = options.body(target);
                Some(Body {
                    center: Vec3::from_array(body.position),
                    radius: body.radius,
                    transform: BodyTransform::default(),
                })
            }),
        }
    }

    /// Mark a body as loaded (or replace it).
    pub fn insert(&mut self, target: Target, center: Vec3, radius: f32) {
        self.bodies[target] = Some(Body {
            center,
            radius,
            transform: BodyTransform::default(),
        });
    }

    /// Drop a body, e.g. while its asset reloads.
    pub fn remove(&mut self, target: Target) -> Option<Body> {
        self.bodies[target].take()
    }

    /// A body, if loaded.
    #[must_use]
    pub fn body(&self, target: Target) -> Option<&Body> {
        self.bodies[target].as_ref()
    }

    /// Number of loaded bodies.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.bodies.iter().filter(|(_, b)| b.is_some()).count()
    }
}

impl HitTester for SceneBodies {
    fn intersect(&self, ray: &Ray) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .bodies
            .iter()
            .filter_map(|(target, body)| {
                let body = body.as_ref()?;
                ray_sphere_intersect(ray, body.center, body.radius)
                    .map(|distance| Hit { target, distance })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl TargetTransforms for SceneBodies {
    fn set_scale(&mut self, target: Target, scale: f32) {
        if let Some(body) = self.bodies[target].as_mut() {
            body.transform.scale = scale;
        }
    }

    fn rotate(&mut self, target: Target, delta: f32) {
        if let Some(body) = self.bodies[target].as_mut() {
            body.transform.rotation_y += delta;
        }
    }
}
