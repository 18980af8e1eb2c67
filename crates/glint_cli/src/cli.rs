use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{RenderConfig, Scene, DEFAULT_BUCKET_SIZE};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style ray tracer for text scene files")]
pub struct Args {
    /// Scene file to render
    pub scene: PathBuf,

    /// Output PNG path (defaults to the scene's `output` setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the maximum trace depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Number of worker threads (defaults to one per core)
    #[arg(short = 'j', long, conflicts_with = "single_threaded")]
    pub threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    pub single_threaded: bool,

    /// Bucket edge length in pixels for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Replace scene settings with any values given on the command line.
    pub fn apply_overrides(&self, scene: &mut Scene) {
        if let Some(width) = self.width {
            scene.width = width;
        }
        if let Some(height) = self.height {
            scene.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            scene.max_depth = max_depth;
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            parallel: !self.single_threaded,
            bucket_size: self.bucket_size,
        }
    }

    /// Where the image is written: `--output`, else the scene's output name.
    pub fn output_path(&self, scene: &Scene) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&scene.output))
    }
}
