//! Sphere primitive.

use serde::{Deserialize, Serialize};
use whit_math::{Ray, Vec3};

/// A sphere with a flat colour and a mirror reflectivity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sphere {
    /// Center point in world coordinates
    pub center: Vec3,

    /// Radius (not validated; see [`crate::Scene::validate`])
    pub radius: f32,

    /// Surface colour (RGB, 0-1)
    pub color: Vec3,

    /// Fraction of the reflected colour blended in, 0-1
    pub reflectivity: f32,

    /// Texture name from the scene file. Parsed and carried, never shaded.
    pub texture: String,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 0.0,
            color: Vec3::ZERO,
            reflectivity: 0.0,
            texture: String::new(),
        }
    }
}

/// Both distances along a ray at which it crosses a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereHit {
    /// Entry distance (`tca - thc`), negative when the origin is inside
    pub t0: f32,
    /// Exit distance (`tca + thc`)
    pub t1: f32,
}

impl SphereHit {
    /// The entry distance if it lies ahead of the origin, else the exit.
    #[inline]
    pub fn nearest(&self) -> f32 {
        if self.t0 < 0.0 {
            self.t1
        } else {
            self.t0
        }
    }
}

impl Sphere {
    /// Create a new non-reflective sphere.
    pub fn new(center: Vec3, radius: f32, color: Vec3) -> Self {
        Self {
            center,
            radius,
            color,
            ..Default::default()
        }
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Intersect a ray whose direction is unit length.
    ///
    /// Projects the center onto the ray. Rays whose closest approach lies
    /// behind the origin are rejected outright, which also rejects a ray
    /// leaving the inside of the sphere away from its center.
    pub fn intersect(&self, ray: &Ray) -> Option<SphereHit> {
        let co = self.center - ray.origin;
        let tca = co.dot(ray.direction);
        if tca < 0.0 {
            return None;
        }

        let radius2 = self.radius * self.radius;
        let d2 = co.dot(co) - tca * tca;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        Some(SphereHit {
            t0: tca - thc,
            t1: tca + thc,
        })
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
