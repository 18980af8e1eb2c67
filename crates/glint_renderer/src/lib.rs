//! Glint Renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! A scene of spheres and triangles (optionally under affine transforms)
//! is lit by directional and point lights with Blinn-Phong shading, binary
//! shadow rays and recursive specular reflection bounded by the scene's
//! `max_depth`.
//!
//! Intersection is a linear scan over the scene's objects per ray.

mod hittable;
mod material;
mod light;
mod sphere;
mod triangle;
mod transformed;
mod camera;
mod scene;
mod renderer;
mod bucket;
mod pixels;

pub use hittable::{HitRecord, Hittable, Object};
pub use material::{reflect, Color, Material};
pub use light::{Attenuation, DirectionalLight, Light, LightSample, LightSource, PointLight};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use transformed::{GeometryError, Transformed};
pub use camera::Camera;
pub use scene::Scene;
pub use renderer::{
    render, render_pixel, render_serial, shade, sky_gradient, trace, ImageBuffer, RenderConfig,
};
pub use bucket::{generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use pixels::{color_to_rgb8, ChannelOrder, PixelBuffer};

/// Re-export common math types from glint_math
pub use glint_math::{Interval, Mat4, Ray, Vec3, EPSILON};
