// Transform utilities for Mat4
//
// Extends glam::Mat4 with the pieces the transform wrapper needs.
// Note: glam::Mat4 already provides transform_point3(), transform_vector3()
// and inverse(), but inverse() does not report singular matrices.

use glam::{Mat4, Vec3};

/// Matrices whose determinant magnitude falls below this are treated as
/// non-invertible.
pub const SINGULAR_DETERMINANT: f32 = 1e-12;

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Inverse of the matrix, or `None` if it is singular or the inverse
    /// is not finite.
    fn try_inverse(&self) -> Option<Mat4>;

    /// Matrix used to carry surface normals: the transpose of the inverse.
    fn normal_matrix(&self) -> Option<Mat4>;

    /// Transform a normal with a precomputed normal matrix and renormalize.
    fn transform_normal(&self, normal: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn try_inverse(&self) -> Option<Mat4> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_DETERMINANT {
            return None;
        }

        let inverse = self.inverse();
        inverse.is_finite().then_some(inverse)
    }

    fn normal_matrix(&self) -> Option<Mat4> {
        self.try_inverse().map(|inv| inv.transpose())
    }

    fn transform_normal(&self, normal: Vec3) -> Vec3 {
        // Normals are directions (w=0)
        self.transform_vector3(normal).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_vector3_ignores_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let vector = Vec3::new(1.0, 0.0, 0.0);

        assert_eq!(mat.transform_vector3(vector), vector);
    }

    #[test]
    fn test_try_inverse_round_trip() {
        use std::f32::consts::PI;

        let mat = Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0))
            * Mat4::from_rotation_y(PI / 4.0)
            * Mat4::from_scale(Vec3::new(2.0, 0.5, 1.0));
        let inv = mat.try_inverse().expect("matrix is invertible");

        let point = Vec3::new(5.0, 3.0, 2.0);
        let back = inv.transform_point3(mat.transform_point3(point));
        assert!((back - point).length() < 1e-4);
    }

    #[test]
    fn test_try_inverse_rejects_singular() {
        let flat = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(flat.try_inverse().is_none());
        assert!(flat.normal_matrix().is_none());

        let nan = Mat4::from_translation(Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(nan.try_inverse().is_none());
    }

    #[test]
    fn test_normal_matrix_non_uniform_scale() {
        // Plane x = y stretched by 2 along x: the normal must stay
        // perpendicular to the stretched surface, not follow the stretch.
        let mat = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let normal_mat = mat.normal_matrix().expect("matrix is invertible");

        let normal = Vec3::new(1.0, -1.0, 0.0).normalize();
        let tangent = Vec3::new(1.0, 1.0, 0.0);

        let world_normal = normal_mat.transform_normal(normal);
        let world_tangent = mat.transform_vector3(tangent);

        assert!(world_normal.dot(world_tangent).abs() < 1e-5);
        assert!((world_normal.length() - 1.0).abs() < 1e-5);
    }
}
