//! CPU ray picking against the selectable bodies.
//!
//! Hover rays are cast from the camera through the cursor and tested
//! against each target's hit sphere. When several targets are hit the
//! nearest one wins.

mod ray;

pub use hit_test::{nearest_target, Hit, HitTester};
pub use ray::{ray_sphere_intersect, Ray};
