//! Whit Core - Scene model for the whit ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane` (a bounded rectangle) and point `Light`s,
//!   each with its own ray intersection test
//! - **Scene**: the read-only aggregate handed to the tracer
//! - **Loading**: the line-oriented scene description format and a JSON form
//!
//! # Example
//!
//! ```ignore
//! use whit_core::load_scene;
//!
//! let scene = load_scene("scenes/mirror_spheres.txt")?;
//! println!("{} spheres, {} planes, {} lights",
//!     scene.spheres.len(),
//!     scene.planes.len(),
//!     scene.lights.len());
//! ```

pub mod light;
pub mod loader;
pub mod parser;
pub mod plane;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use light::Light;
pub use loader::{load_scene, LoadError, LoadResult};
pub use parser::{parse_scene, ParseError, ParseResult};
pub use plane::{Plane, PlaneBounds, PlaneHit};
pub use scene::{Scene, SceneError};
pub use sphere::{Sphere, SphereHit};
