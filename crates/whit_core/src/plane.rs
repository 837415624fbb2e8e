//! Bounded plane primitive.
//!
//! A `Plane` is a finite rectangle lying in an infinite plane. The
//! rectangle's orientation comes from `headup`, an in-plane "up" hint: the
//! local frame is `x = normalize(headup × normal)`, `y = normalize(normal × x)`.

use serde::{Deserialize, Serialize};
use whit_math::{Interval, Ray, Vec2, Vec3};

/// Rays with `|normal · dir|` at or below this are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// How a hit point's local coordinates are bounds-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneBounds {
    /// Check local coordinates against `center.x ± width/2` and
    /// `center.y ± height/2`. The rectangle's world x/y position leaks into
    /// the local test, so planes away from the world origin end up with
    /// shifted extents. Kept as the default so existing scenes render unchanged.
    #[default]
    WorldOffset,

    /// Check local coordinates against `±width/2` and `±height/2`.
    Local,
}

/// A finite rectangle embedded in a plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plane {
    pub center: Vec3,
    pub normal: Vec3,
    pub headup: Vec3,
    pub width: f32,
    pub height: f32,
    pub color: Vec3,
    pub reflectivity: f32,
    pub texture: String,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            normal: Vec3::ZERO,
            headup: Vec3::ZERO,
            width: 0.0,
            height: 0.0,
            color: Vec3::ZERO,
            reflectivity: 0.0,
            texture: String::new(),
        }
    }
}

/// Where a ray met a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Distance along the ray
    pub t: f32,
    /// Hit point relative to `center`, in the plane's local frame
    pub local: Vec2,
}

impl Plane {
    /// Create a new non-reflective plane.
    pub fn new(center: Vec3, normal: Vec3, headup: Vec3, width: f32, height: f32, color: Vec3) -> Self {
        Self {
            center,
            normal,
            headup,
            width,
            height,
            color,
            ..Default::default()
        }
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// The plane's in-plane axes `(x, y)`.
    pub fn frame(&self) -> (Vec3, Vec3) {
        let x_axis = self.headup.cross(self.normal).normalize();
        let y_axis = self.normal.cross(x_axis).normalize();
        (x_axis, y_axis)
    }

    /// Unit normal used for shading.
    #[inline]
    pub fn unit_normal(&self) -> Vec3 {
        self.normal.normalize()
    }

    /// Intersect a ray with the rectangle.
    ///
    /// Returns `None` for rays (near) parallel to the plane, hits outside
    /// the rectangle, and hits behind the origin.
    pub fn intersect(&self, ray: &Ray, bounds: PlaneBounds) -> Option<PlaneHit> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin).dot(self.normal) / denom;
        let to_hit = ray.at(t) - self.center;

        let (x_axis, y_axis) = self.frame();
        let local = Vec2::new(to_hit.dot(x_axis), to_hit.dot(y_axis));

        let (across, up) = match bounds {
            PlaneBounds::WorldOffset => (
                Interval::centered(self.center.x, self.width),
                Interval::centered(self.center.y, self.height),
            ),
            PlaneBounds::Local => (
                Interval::centered(0.0, self.width),
                Interval::centered(0.0, self.height),
            ),
        };

        if across.surrounds(local.x) && up.surrounds(local.y) && t >= 0.0 {
            Some(PlaneHit { t, local })
        } else {
            None
        }
    }
}
