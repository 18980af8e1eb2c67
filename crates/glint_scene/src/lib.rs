//! Glint Scene - text scene descriptions for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Parsing**: a line-oriented command format with an explicit
//!   transform stack, producing a populated `glint_renderer::Scene`
//! - **Loading**: reading scene files from disk
//!
//! # Example
//!
//! ```ignore
//! use glint_scene::load_scene;
//!
//! let scene = load_scene("scenes/spheres.test")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects().len(),
//!     scene.lights().len());
//! ```

mod parser;
mod loader;

pub use parser::{parse_scene, ParseError, ParseResult, TransformStack};
pub use loader::{load_scene, LoadError, LoadResult};
