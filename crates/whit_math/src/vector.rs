//! Vector helpers on top of glam.
//!
//! glam already provides the arithmetic, dot and cross products. What lives
//! here is the behaviour the tracer needs around them: mirror reflection,
//! a checked normalisation, and the exact-zero test.

use crate::Vec3;
use thiserror::Error;

/// A vector could not be normalised because its magnitude is zero or
/// not finite.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
pub struct DegenerateVectorError {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Normalise `v`, failing instead of producing NaN/Inf.
///
/// `Vec3::normalize` divides by the magnitude unconditionally, so a zero
/// vector yields NaN components. Tracing keeps that permissive behaviour;
/// this is the checked variant used by scene validation.
pub fn normalize_or_degenerate(v: Vec3) -> Result<Vec3, DegenerateVectorError> {
    v.try_normalize().ok_or(DegenerateVectorError {
        x: v.x,
        y: v.y,
        z: v.z,
    })
}

/// Exact equality with `(0, 0, 0)`.
#[inline]
pub fn is_exact_zero(v: Vec3) -> bool {
    v == Vec3::ZERO
}

/// Mirror `dir` about `normal`: `dir - normal * 2 * dot(dir, normal)`.
///
/// The result is not renormalised.
#[inline]
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    dir - normal * 2.0 * dir.dot(normal)
}
