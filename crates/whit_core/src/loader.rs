//! Scene loading from disk.
//!
//! `.json` files are deserialised straight into a [`Scene`]; anything else
//! goes through the text parser.

use std::path::Path;

use thiserror::Error;

use crate::parser::{parse_scene, ParseError};
use crate::scene::Scene;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file, picking the format from its extension.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let scene = if is_json {
        serde_json::from_str::<Scene>(&content)?
    } else {
        parse_scene(&content)?
    };

    log::info!(
        "Loaded {}: {}x{}, {} spheres, {} planes, {} lights",
        path.display(),
        scene.size,
        scene.size,
        scene.spheres.len(),
        scene.planes.len(),
        scene.lights.len()
    );
    if scene.primitive_count() == 0 {
        log::warn!("{} has no spheres or planes; the image will be background only", path.display());
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whit_math::Vec3;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("whit_core_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_text_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = temp_path("scene.txt");
        std::fs::write(&path, "camera 32\n\nlight\nlocation 0 1 0\ncolor 1 1 1\n").unwrap();

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.size, 32);
        assert_eq!(scene.lights.len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_json_scene() {
        let path = temp_path("scene.json");
        std::fs::write(
            &path,
            r#"{
                "size": 16,
                "spheres": [{ "center": [0, 0, -5], "radius": 1, "color": [0, 1, 0] }]
            }"#,
        )
        .unwrap();

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.size, 16);
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(scene.spheres[0].reflectivity, 0.0);
        assert!(scene.planes.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene(temp_path("does_not_exist.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let path = temp_path("bad.txt");
        std::fs::write(&path, "sphere\n").unwrap();

        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::MissingCamera)));

        std::fs::remove_file(&path).ok();
    }
}
