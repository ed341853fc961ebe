use glam::Vec3;

/// A half-line in world space. `dir` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `dir`.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Ray-sphere intersection test.
///
/// Returns the distance along the ray to the first intersection in front
/// of the origin, or `None` if the sphere is missed or entirely behind.
#[must_use]
pub fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.dir.dot(ray.dir);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        return Some(t);
    }
    // Origin inside the sphere: take the far intersection
    let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
    (t2 > 0.0).then_some(t2)
}
