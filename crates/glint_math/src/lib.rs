// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
mod interval;
mod transform;

pub use ray::Ray;
pub use interval::Interval;
pub use transform::Mat4Ext;

/// Self-intersection bias for secondary ray origins, also used as the
/// near-parallel threshold in ray/triangle tests and as the minimum hit `t`.
pub const EPSILON: f32 = 1e-4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_epsilon_is_small_and_positive() {
        assert!(EPSILON > 0.0);
        assert!(EPSILON < 1e-2);
    }
}
