//! PNG export of rendered images.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{ChannelOrder, ImageBuffer, PixelBuffer};
use image::RgbImage;

/// Convert a rendered image into an 8-bit RGB image.
pub fn to_rgb_image(image: &ImageBuffer) -> Result<RgbImage> {
    let pixels: PixelBuffer = image.to_pixel_buffer(ChannelOrder::Rgb);
    let (width, height) = (pixels.width, pixels.height);
    RgbImage::from_raw(width, height, pixels.into_raw())
        .with_context(|| format!("pixel buffer does not match {}x{}", width, height))
}

/// Save a rendered image as PNG.
pub fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = to_rgb_image(image)?;
    rgb.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}
