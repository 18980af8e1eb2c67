//! Core Whitted ray tracing renderer.
//!
//! Implements:
//! - Closest-hit visibility with a linear scan over scene objects
//! - Blinn-Phong direct lighting with binary shadow rays
//! - Recursive specular reflection bounded by the scene's `max_depth`

use crate::bucket::{render_buckets, DEFAULT_BUCKET_SIZE};
use crate::{reflect, ChannelOrder, Color, HitRecord, LightSample, LightSource, PixelBuffer, Scene};
use glint_math::{Interval, Ray, EPSILON};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Render buckets on the rayon thread pool instead of a single loop
    pub parallel: bool,
    /// Bucket edge length in pixels for the parallel path
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the color seen by a ray.
///
/// `depth` counts bounces taken so far; the camera ray starts at 0.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    // Past the recursion bound: no light
    if depth >= scene.max_depth {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(ray, Interval::new(EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    let material = rec.material;
    let mut color = material.ambient * scene.global_ambient + material.emission;

    // Direct lighting with shadow rays
    let shadow_origin = rec.p + rec.normal * EPSILON;
    for light in scene.lights() {
        let sample = light.light_info(rec.p);
        let shadow_ray = Ray::new(shadow_origin, sample.direction);
        let shadow_t = if sample.is_directional {
            f32::INFINITY
        } else {
            sample.distance
        };

        if !scene.occluded(&shadow_ray, Interval::new(EPSILON, shadow_t)) {
            color += shade(ray, &rec, &sample);
        }
    }

    // Mirror reflection, weighted by the specular color
    if material.is_reflective() {
        let reflected = Ray::new(
            rec.p + rec.normal * EPSILON,
            reflect(ray.direction().normalize(), rec.normal),
        );
        color += material.specular * trace(&reflected, scene, depth + 1);
    }

    color
}

/// Blinn-Phong diffuse and specular terms for one unoccluded light.
pub fn shade(ray: &Ray, rec: &HitRecord, sample: &LightSample) -> Color {
    let material = rec.material;
    let n = rec.normal;
    let l = sample.direction;
    let view = (ray.origin() - rec.p).normalize();

    let n_dot_l = n.dot(l).max(0.0);
    let mut color = material.diffuse * sample.intensity * n_dot_l;

    if material.shininess > 0.0 && n_dot_l > 0.0 {
        let half = (l + view).normalize();
        let n_dot_h = n.dot(half).max(0.0);
        color += material.specular * sample.intensity * n_dot_h.powf(material.shininess);
    }

    color
}

/// Fixed vertical background gradient from white to sky blue.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel. Row 0 is the top of the image.
pub fn render_pixel(scene: &Scene, x: u32, y: u32) -> Color {
    let s = (x as f32 + 0.5) / scene.width as f32;
    let t = (scene.height as f32 - y as f32 - 0.5) / scene.height as f32;

    let ray = scene.camera.get_ray(s, t, scene.aspect_ratio());
    trace(&ray, scene, 0)
}

/// Linear color image produced by a render.
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

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Row-major offset of (x, y), computed in `usize` so large images do
    /// not wrap.
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Quantize to 8-bit channels in the order the encoder expects.
    pub fn to_pixel_buffer(&self, order: ChannelOrder) -> PixelBuffer {
        PixelBuffer::from_colors(self.width, self.height, &self.pixels, order)
    }
}

/// Render the entire scene with a single-threaded scanline loop.
pub fn render_serial(scene: &Scene) -> ImageBuffer {
    let mut image = ImageBuffer::new(scene.width, scene.height);

    for y in 0..scene.height {
        for x in 0..scene.width {
            image.set(x, y, render_pixel(scene, x, y));
        }
    }

    image
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} ({} objects, {} lights, max depth {})",
        scene.width,
        scene.height,
        scene.objects().len(),
        scene.lights().len(),
        scene.max_depth
    );

    let start = Instant::now();
    let image = if config.parallel {
        render_buckets(scene, config.bucket_size)
    } else {
        render_serial(scene)
    };

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
