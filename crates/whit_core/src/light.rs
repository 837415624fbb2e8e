//! Point lights.

use serde::{Deserialize, Serialize};
use whit_math::Vec3;

/// A point light.
///
/// `color` doubles as radiant intensity; there is no falloff with distance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    /// World-space position
    pub location: Vec3,

    /// RGB intensity
    pub color: Vec3,
}

impl Light {
    /// Create a new light.
    pub fn new(location: Vec3, color: Vec3) -> Self {
        Self { location, color }
    }
}
