use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use whit_core::{load_scene, PlaneBounds};
use whit_renderer::{render_with_stats, save_image, Camera, RenderConfig, DEFAULT_MAX_DEPTH};

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a scene description with recursive ray tracing
#[derive(Parser, Debug)]
#[command(name = "whit", version)]
struct Args {
    /// Scene description (.json for the JSON form, anything else is text)
    scene: PathBuf,

    /// Output image (.ppm or .png)
    output: PathBuf,

    /// Override the image size from the scene's camera directive
    #[arg(long)]
    size: Option<u32>,

    /// Maximum reflection depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Bounds-check planes in their own frame instead of against world x/y
    #[arg(long)]
    local_plane_bounds: bool,

    /// Offset rays leaving planes along the normal, like sphere rays, and
    /// let reflective planes reflect
    #[arg(long)]
    uniform_bias: bool,

    /// Validate the scene and fail on non-finite pixels
    #[arg(long)]
    strict: bool,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            plane_bounds: if self.local_plane_bounds {
                PlaneBounds::Local
            } else {
                PlaneBounds::WorldOffset
            },
            offset_plane_rays: self.uniform_bias,
            strict: self.strict,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    if let Some(size) = args.size {
        log::info!("Overriding image size {} -> {}", scene.size, size);
        scene.size = size;
    }

    if args.strict {
        scene.validate().context("Scene failed validation")?;
    }

    let config = args.render_config();
    let camera = Camera::new(scene.size);
    let (image, stats) = render_with_stats(&camera, &scene, &config).context("Render failed")?;

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Done: {}x{} in {:?} ({} of {} pixels hit geometry)",
        image.width,
        image.height,
        stats.elapsed,
        stats.hits,
        stats.pixels
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["whit", "scene.txt", "out.ppm"]).unwrap();
        assert_eq!(args.scene, PathBuf::from("scene.txt"));
        assert_eq!(args.size, None);

        let config = args.render_config();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::try_parse_from([
            "whit",
            "scene.json",
            "out.png",
            "--max-depth",
            "2",
            "--local-plane-bounds",
            "--uniform-bias",
            "--strict",
            "--size",
            "64",
        ])
        .unwrap();

        let config = args.render_config();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.plane_bounds, PlaneBounds::Local);
        assert!(config.offset_plane_rays);
        assert!(config.strict);
        assert_eq!(args.size, Some(64));
    }

    #[test]
    fn test_args_require_paths() {
        assert!(Args::try_parse_from(["whit", "scene.txt"]).is_err());
    }
}
