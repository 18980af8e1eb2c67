//! Affine transform wrapper for any scene object.
//!
//! Rays are carried into object space with the inverse matrix, the wrapped
//! object is intersected there, and the hit is mapped back to world space.
//! The object-space direction is not renormalized, so the child's `t` is
//! also the world-space ray parameter.

use crate::hittable::{HitRecord, Hittable, Object};
use glint_math::{Interval, Mat4, Mat4Ext, Ray};
use thiserror::Error;

/// Errors raised while building scene geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("transform matrix is not invertible (determinant {determinant})")]
    SingularTransform { determinant: f32 },
}

/// An object placed in the world by an object-to-world matrix.
#[derive(Debug, Clone)]
pub struct Transformed {
    object: Box<Object>,

    /// Local-to-world transform
    object_to_world: Mat4,

    /// World-to-local transform (for ray transformation)
    world_to_object: Mat4,

    /// Inverse-transpose of `object_to_world` (for normals)
    normal_matrix: Mat4,
}

impl Transformed {
    /// Wrap `object` with `object_to_world`.
    ///
    /// Inverse and normal matrices are computed once here. Fails if the
    /// matrix is singular.
    pub fn new(object: Object, object_to_world: Mat4) -> Result<Self, GeometryError> {
        let singular = || GeometryError::SingularTransform {
            determinant: object_to_world.determinant(),
        };
        let world_to_object = object_to_world.try_inverse().ok_or_else(singular)?;

        Ok(Self {
            object: Box::new(object),
            object_to_world,
            world_to_object,
            normal_matrix: world_to_object.transpose(),
        })
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn object_to_world(&self) -> Mat4 {
        self.object_to_world
    }

    pub fn world_to_object(&self) -> Mat4 {
        self.world_to_object
    }
}

impl Hittable for Transformed {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Transform ray to local space
        let local_ray = Ray::new(
            self.world_to_object.transform_point3(ray.origin()),
            self.world_to_object.transform_vector3(ray.direction()),
        );

        let mut rec = self.object.hit(&local_ray, ray_t)?;

        // Transform hit back to world space
        rec.p = self.object_to_world.transform_point3(rec.p);

        // Handedness may flip under the transform, so orientation is
        // re-derived from the outward normal against the world-space ray
        let outward = if rec.front_face { rec.normal } else { -rec.normal };
        let world_normal = self.normal_matrix.transform_normal(outward);
        rec.set_face_normal(ray, world_normal);

        Some(rec)
    }
}
