//! Scene aggregate.
//!
//! A `Scene` is built once by a loader and then only read: the tracer
//! borrows it immutably for the whole render.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use whit_math::{normalize_or_degenerate, DegenerateVectorError, Vec3};

use crate::light::Light;
use crate::plane::Plane;
use crate::sphere::Sphere;

/// Problems found by [`Scene::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("image size must be positive")]
    ZeroSize,

    #[error("sphere {index} has negative radius {radius}")]
    NegativeRadius { index: usize, radius: f32 },

    #[error("plane {index} has a degenerate normal: {source}")]
    DegenerateNormal {
        index: usize,
        #[source]
        source: DegenerateVectorError,
    },

    #[error("plane {index} headup is parallel to its normal: {source}")]
    DegenerateFrame {
        index: usize,
        #[source]
        source: DegenerateVectorError,
    },

    #[error("{what} contains a non-finite value")]
    NonFinite { what: String },
}

/// A complete scene: image size, primitives and lights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Edge length of the square output image, in pixels
    pub size: u32,

    pub spheres: Vec<Sphere>,

    pub planes: Vec<Plane>,

    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene for a `size × size` image.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Add a sphere.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a plane.
    pub fn with_plane(mut self, plane: Plane) -> Self {
        self.planes.push(plane);
        self
    }

    /// Add a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Number of primitives (spheres and planes).
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len()
    }

    /// Check for geometry that would turn into NaN/Inf during tracing.
    ///
    /// Tracing never calls this; it is the opt-in strict check.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.size == 0 {
            return Err(SceneError::ZeroSize);
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            check_finite(&format!("sphere {index}"), &[sphere.center, sphere.color])?;
            if !sphere.radius.is_finite() || !sphere.reflectivity.is_finite() {
                return Err(SceneError::NonFinite {
                    what: format!("sphere {index}"),
                });
            }
            if sphere.radius < 0.0 {
                return Err(SceneError::NegativeRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }

        for (index, plane) in self.planes.iter().enumerate() {
            check_finite(
                &format!("plane {index}"),
                &[plane.center, plane.normal, plane.headup, plane.color],
            )?;
            let normal = normalize_or_degenerate(plane.normal)
                .map_err(|source| SceneError::DegenerateNormal { index, source })?;
            normalize_or_degenerate(plane.headup.cross(normal))
                .map_err(|source| SceneError::DegenerateFrame { index, source })?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            check_finite(&format!("light {index}"), &[light.location, light.color])?;
        }

        Ok(())
    }
}

fn check_finite(what: &str, vectors: &[Vec3]) -> Result<(), SceneError> {
    if vectors.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SceneError::NonFinite {
            what: what.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        Scene::new(64)
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Vec3::X))
            .with_plane(Plane::new(
                Vec3::new(0.0, -2.0, -10.0),
                Vec3::Y,
                Vec3::Z,
                10.0,
                10.0,
                Vec3::ONE,
            ))
            .with_light(Light::new(Vec3::new(0.0, 20.0, -10.0), Vec3::ONE))
    }

    #[test]
    fn test_scene_creation() {
        let scene = sample_scene();
        assert_eq!(scene.size, 64);
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_size() {
        assert_eq!(Scene::new(0).validate(), Err(SceneError::ZeroSize));
    }

    #[test]
    fn test_validate_negative_radius() {
        let scene = Scene::new(8).with_sphere(Sphere::new(Vec3::ZERO, -1.0, Vec3::ONE));
        assert!(matches!(
            scene.validate(),
            Err(SceneError::NegativeRadius { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_degenerate_plane() {
        let mut scene = sample_scene();
        scene.planes[0].normal = Vec3::ZERO;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::DegenerateNormal { index: 0, .. })
        ));

        scene.planes[0].normal = Vec3::Y;
        scene.planes[0].headup = Vec3::Y;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::DegenerateFrame { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_non_finite() {
        let mut scene = sample_scene();
        scene.lights[0].color = Vec3::new(f32::NAN, 1.0, 1.0);
        let err = scene.validate().unwrap_err();
        assert_eq!(err.to_string(), "light 0 contains a non-finite value");
    }

    #[test]
    fn test_scene_json_roundtrip() {
        let scene = sample_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let parsed: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scene);
    }
}
