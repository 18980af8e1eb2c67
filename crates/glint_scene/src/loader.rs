//! Scene file loading.

use std::path::Path;

use glint_renderer::Scene;
use thiserror::Error;

use crate::parser::{parse_scene, ParseError};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Read and parse a scene file.
///
/// # Example
///
/// ```ignore
/// use glint_scene::load_scene;
///
/// let scene = load_scene("scenes/spheres.test")?;
/// println!("Loaded {} objects", scene.objects().len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let scene = parse_scene(&content)?;

    log::info!(
        "Loaded {}: {} objects, {} lights, {}x{} @ depth {}",
        path.display(),
        scene.objects().len(),
        scene.lights().len(),
        scene.width,
        scene.height,
        scene.max_depth
    );

    Ok(scene)
}
