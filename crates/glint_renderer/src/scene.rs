//! Scene aggregate: geometry, lights, camera and render settings.

use crate::{Camera, Color, HitRecord, Hittable, Light, Object};
use glint_math::{Interval, Ray};

/// Everything needed to render one image.
///
/// The scene exclusively owns its objects and lights. It is built once,
/// read (possibly from many threads) during rendering, and dropped after.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Recursion bound for `trace`; depths at or past it contribute black
    pub max_depth: u32,
    /// Output file name requested by the scene description
    pub output: String,
    pub camera: Camera,
    /// Multiplied by each material's ambient color
    pub global_ambient: Color,
    objects: Vec<Object>,
    lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 5,
            output: "raytrace.png".to_string(),
            camera: Camera::default(),
            global_ambient: Color::splat(0.2),
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl Scene {
    /// Create an empty scene with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_global_ambient(mut self, ambient: Color) -> Self {
        self.global_ambient = ambient;
        self
    }

    /// Add an object; declaration order is preserved.
    pub fn add_object(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Closest hit over all objects, narrowing the upper bound as hits are found.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    /// True if any object is hit within `ray_t`. Stops at the first hit.
    pub fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.objects.iter().any(|object| object.hit(ray, ray_t).is_some())
    }
}
