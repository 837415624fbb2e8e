//! Whit Renderer - Whitted-style CPU ray tracing
//!
//! Recursive ray tracer with mirror reflection and hard shadows from point
//! lights. One camera ray per pixel; no sampling, no acceleration structure.

mod camera;
mod output;
mod renderer;
mod tracer;

pub use camera::{Camera, DEFAULT_FOV};
pub use output::{color_to_rgb8, save_image, write_ppm, OutputError, OutputResult};
pub use renderer::{
    render, render_pixel, render_with_stats, ImageBuffer, RenderConfig, RenderError, RenderStats,
    DEFAULT_BIAS, DEFAULT_MAX_DEPTH,
};
pub use tracer::{nearest_hit, trace, trace_with_stats, Color, HitRecord, Surface, TraceStats};

/// Re-export Vec3 and common math types from whit_math
pub use whit_math::{Ray, Vec3};
