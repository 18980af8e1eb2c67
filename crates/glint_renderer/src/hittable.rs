//! Hittable trait, HitRecord, and the closed set of scene objects.

use crate::{GeometryError, Material, Sphere, Transformed, Triangle};
use glint_math::{Interval, Mat4, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at intersection (always points against the ray)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a hit record, orienting `outward_normal` against `ray`.
    pub fn new(ray: &Ray, t: f32, p: Vec3, outward_normal: Vec3, material: &'a Material) -> Self {
        let mut rec = Self {
            p,
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with `t` strictly inside `ray_t`.
    ///
    /// Returns the hit record on success and `None` otherwise. An interval
    /// with `min > max` never produces a hit.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Any intersectable object a scene can hold.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Triangle(Triangle),
    Transformed(Transformed),
}

impl Object {
    /// Wrap this object with an object-to-world matrix.
    ///
    /// Fails if the matrix cannot be inverted.
    pub fn transformed(self, object_to_world: Mat4) -> Result<Object, GeometryError> {
        Transformed::new(self, object_to_world).map(Object::Transformed)
    }
}

impl Hittable for Object {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, ray_t),
            Object::Triangle(triangle) => triangle.hit(ray, ray_t),
            Object::Transformed(transformed) => transformed.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Object::Triangle(triangle)
    }
}

impl From<Transformed> for Object {
    fn from(transformed: Transformed) -> Self {
        Object::Transformed(transformed)
    }
}
