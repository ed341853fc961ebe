use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::options::CameraOptions;
use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build a camera from options for a viewport of the given aspect.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::from_array(options.look_at),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh uses the [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (`[-1, 1]` on both axes, +y up).
    #[must_use]
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();

        let world_near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        // Perspective divide
        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray::new(origin, far - origin)
    }

    /// Project a world-space point to normalized device coordinates.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Vec2 {
        self.build_matrix().project_point3(point).truncate()
    }
}

/// The canvas rectangle pointer coordinates are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Top-left corner in pointer coordinates.
    pub origin: Vec2,
    /// Width and height in pointer coordinates.
    pub size: Vec2,
}

impl Viewport {
    /// A viewport anchored at the window origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    /// Width / height, or 1.0 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.is_degenerate() {
            1.0
        } else {
            self.size.x / self.size.y
        }
    }

    /// Whether the viewport has no area to map pointers into.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Convert a pointer position to normalized device coordinates, y
    /// flipped so +1 is the top edge. `None` when the viewport is
    /// degenerate.
    #[must_use]
    pub fn to_ndc(&self, pointer: Vec2) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        let local = (pointer - self.origin) / self.size;
        Some(Vec2::new(local.x * 2.0 - 1.0, -(local.y * 2.0) + 1.0))
    }

    /// Inverse of [`to_ndc`](Self::to_ndc).
    #[must_use]
    pub fn ndc_to_pointer(&self, ndc: Vec2) -> Vec2 {
        let local = Vec2::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5);
        self.origin + local * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn ndc_corners_and_center() {
        let vp = Viewport {
            origin: Vec2::new(10.0, 20.0),
            size: Vec2::new(200.0, 100.0),
        };
        assert!(approx(vp.to_ndc(Vec2::new(10.0, 20.0)).unwrap(), Vec2::new(-1.0, 1.0)));
        assert!(approx(vp.to_ndc(Vec2::new(210.0, 120.0)).unwrap(), Vec2::new(1.0, -1.0)));
        assert!(approx(vp.to_ndc(Vec2::new(110.0, 70.0)).unwrap(), Vec2::ZERO));
    }

    #[test]
    fn ndc_round_trips_through_pixels() {
        let vp = Viewport::from_size(800.0, 600.0);
        let p = Vec2::new(123.0, 456.0);
        assert!(approx(vp.ndc_to_pointer(vp.to_ndc(p).unwrap()), p));
    }

    #[test]
    fn degenerate_viewport_has_no_ndc() {
        let vp = Viewport::from_size(0.0, 600.0);
        assert!(vp.to_ndc(Vec2::new(1.0, 1.0)).is_none());
        assert_eq!(vp.aspect(), 1.0);
    }

    #[test]
    fn center_ray_points_at_look_target() {
        let camera = Camera::from_options(&CameraOptions::default(), 1.0);
        let ray = camera.ray_through(Vec2::ZERO);
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
        // Origin sits on the near plane in front of the eye
        assert!((ray.origin.z - (5.0 - 0.1)).abs() < 1e-3);
    }

    #[test]
    fn projected_point_lies_on_its_ray() {
        let camera = Camera::from_options(&CameraOptions::default(), 1.5);
        let point = Vec3::new(-3.0, 0.5, 0.0);
        let ray = camera.ray_through(camera.project(point));
        let to_point = point - ray.origin;
        let along = to_point.dot(ray.dir);
        let off_axis = (to_point - ray.dir * along).length();
        assert!(off_axis < 1e-3, "off_axis = {off_axis}");
    }
}
