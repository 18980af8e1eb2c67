use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_png;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let mut scene = glint_scene::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply_overrides(&mut scene);
    if scene.width == 0 || scene.height == 0 {
        anyhow::bail!("Image size must be nonzero, got {}x{}", scene.width, scene.height);
    }

    let image = glint_renderer::render(&scene, &args.render_config());

    let path = args.output_path(&scene);
    save_png(&image, &path)?;

    Ok(())
}
