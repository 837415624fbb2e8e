//! Image renderer.
//!
//! Walks every pixel of the square image in row-major order, traces one
//! camera ray per pixel and stores the unclamped result.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use whit_core::{PlaneBounds, Scene};
use whit_math::is_exact_zero;

use crate::output::color_to_rgb8;
use crate::tracer::{trace_with_stats, Color, TraceStats};
use crate::Camera;

/// Default reflection recursion limit.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default secondary-ray origin offset along the surface normal.
pub const DEFAULT_BIAS: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Offset for secondary ray origins
    pub bias: f32,
    /// Colour stored for camera rays that hit nothing
    pub background: Color,
    /// Rectangle bounds test used for planes
    pub plane_bounds: PlaneBounds,
    /// Apply `bias` to rays leaving planes as well as spheres. Planes only
    /// reflect when this is set.
    pub offset_plane_rays: bool,
    /// Fail on the first non-finite pixel instead of storing it
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            bias: DEFAULT_BIAS,
            background: Color::ZERO,
            plane_bounds: PlaneBounds::WorldOffset,
            offset_plane_rays: false,
            strict: false,
        }
    }
}

/// Errors raised while rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("pixel ({x}, {y}) is not finite: {color}")]
    NonFinite { x: u32, y: u32, color: Color },
}

/// Summary of a finished render.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    pub pixels: u64,
    /// Camera rays that hit a primitive
    pub hits: u64,
    /// Pixels whose colour is exactly black
    pub black_pixels: u64,
    pub trace: TraceStats,
    pub elapsed: Duration,
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed 8-bit RGB, clamping each channel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Render a single pixel.
///
/// Returns the traced colour and whether the camera ray hit anything.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> (Color, bool) {
    let ray = camera.primary_ray(x, y);
    match trace_with_stats(&ray, scene, 0, config, stats) {
        Some(color) => (color, true),
        None => (config.background, false),
    }
}

/// Render the entire scene to an image buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    render_with_stats(camera, scene, config).map(|(image, _)| image)
}

/// [`render`], also returning counters for the run.
pub fn render_with_stats(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<(ImageBuffer, RenderStats), RenderError> {
    let start = Instant::now();
    let size = camera.size;
    let mut image = ImageBuffer::new(size, size);
    let mut stats = RenderStats::default();

    log::debug!(
        "Rendering {}x{} (max depth {}, bias {}, planes {:?})",
        size,
        size,
        config.max_depth,
        config.bias,
        config.plane_bounds
    );

    for y in 0..size {
        for x in 0..size {
            let (color, hit) = render_pixel(camera, scene, x, y, config, &mut stats.trace);

            if config.strict && !color.is_finite() {
                return Err(RenderError::NonFinite { x, y, color });
            }

            stats.pixels += 1;
            stats.hits += u64::from(hit);
            stats.black_pixels += u64::from(is_exact_zero(color));
            image.set(x, y, color);
        }
    }

    stats.elapsed = start.elapsed();
    log::info!(
        "Rendered {} pixels in {:?}: {} hits, {} rays, max depth {}",
        stats.pixels,
        stats.elapsed,
        stats.hits,
        stats.trace.rays,
        stats.trace.deepest
    );

    Ok((image, stats))
}
