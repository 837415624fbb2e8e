//! Pinhole camera for primary ray generation.

use whit_math::{Ray, Vec3};

/// Default vertical field of view, in degrees.
pub const DEFAULT_FOV: f32 = 45.0;

/// A pinhole camera at the world origin looking down `-z`.
///
/// The image is square, so the aspect ratio is always 1.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Image edge length in pixels
    pub size: u32,

    // Cached values, kept in single precision
    angle: f32,
    inv_size: f32,
}

impl Camera {
    /// Create a camera for a `size × size` image.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            angle: half_angle_scale(DEFAULT_FOV),
            inv_size: 1.0 / size as f32,
        }
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.angle = half_angle_scale(fov);
        self
    }

    /// Ray through the center of pixel `(x, y)`; `y` grows downwards.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        // The pixel offset is widened to f64 and the cached factors join it there
        let inv_size = f64::from(self.inv_size);
        let angle = f64::from(self.angle);
        let xx = (2.0 * ((f64::from(x) + 0.5) * inv_size) - 1.0) * angle;
        let yy = (1.0 - 2.0 * ((f64::from(y) + 0.5) * inv_size)) * angle;

        let direction = Vec3::new(xx as f32, yy as f32, -1.0).normalize();
        Ray::new(Vec3::ZERO, direction)
    }
}

/// `tan(fov / 2)`, evaluated in f64 and stored as f32.
fn half_angle_scale(fov: f32) -> f32 {
    (0.5 * f64::from(fov)).to_radians().tan() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_looks_down_negative_z() {
        let camera = Camera::new(1);
        let ray = camera.primary_ray(0, 0);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let camera = Camera::new(16);
        for (x, y) in [(0, 0), (15, 0), (7, 9), (15, 15)] {
            let ray = camera.primary_ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-6);
            assert!(ray.direction.z < 0.0);
        }
    }

    #[test]
    fn test_orientation() {
        let camera = Camera::new(100);

        // Top-left pixel points up and to the left
        let top_left = camera.primary_ray(0, 0).direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        // Bottom-right pixel points down and to the right
        let bottom_right = camera.primary_ray(99, 99).direction;
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);

        // Mirror-symmetric about the center
        assert!((top_left + Vec3::new(bottom_right.x, bottom_right.y, -bottom_right.z)).length() < 1e-6);
    }

    #[test]
    fn test_cached_factors_are_single_precision() {
        let camera = Camera::new(3);
        assert_eq!(camera.inv_size, 1.0_f32 / 3.0);
        assert_eq!(camera.angle, (22.5_f64).to_radians().tan() as f32);

        // Pixel 2 of 3: widened products, one narrowing at the end
        let expected = ((2.0 * (2.5 * f64::from(1.0_f32 / 3.0)) - 1.0) * f64::from(camera.angle)) as f32;
        let ray = camera.primary_ray(2, 1);
        let slope = ray.direction.x / -ray.direction.z;
        assert!((slope - expected).abs() < 1e-6);
    }

    #[test]
    fn test_field_of_view_edge() {
        // The outer edge of the image sits at tan(fov/2) on the z = -1 plane
        let camera = Camera::new(1000);
        let edge = camera.primary_ray(999, 500).direction;
        let slope = edge.x / -edge.z;
        assert!((slope - (22.5_f32).to_radians().tan()).abs() < 1e-2);

        let wide = Camera::new(1000).with_fov(90.0);
        let edge = wide.primary_ray(999, 500).direction;
        assert!((edge.x / -edge.z - 1.0).abs() < 1e-2);
    }
}
