// Re-export glam for convenience
pub use glam::*;

// Whit math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{is_exact_zero, normalize_or_degenerate, reflect, DegenerateVectorError};
