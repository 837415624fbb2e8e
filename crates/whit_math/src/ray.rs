use crate::Vec3;

/// A ray in 3D space: an origin and a direction.
///
/// Every ray the tracer builds carries a unit-length direction, so the
/// parameter `t` in [`Ray::at`] is a distance in world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Build a secondary ray leaving `point` along `direction`, with the
    /// origin pushed `bias` units along `normal`.
    ///
    /// A zero bias gives a ray starting exactly on the surface.
    #[inline]
    pub fn offset(point: Vec3, normal: Vec3, bias: f32, direction: Vec3) -> Self {
        Self::new(point + normal * bias, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_offset() {
        let ray = Ray::offset(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, 1e-4, Vec3::X);
        assert_eq!(ray.origin, Vec3::new(0.0, 1.0001, 0.0));
        assert_eq!(ray.direction, Vec3::X);

        let flush = Ray::offset(Vec3::ONE, Vec3::Y, 0.0, Vec3::Z);
        assert_eq!(flush.origin, Vec3::ONE);
    }
}
