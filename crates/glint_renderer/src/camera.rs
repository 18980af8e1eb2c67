//! Pinhole camera for view ray generation.

use glint_math::{Ray, Vec3};

/// Camera mapping normalized image-plane coordinates to world-space rays.
///
/// `up` must not be parallel to the view direction; a degenerate basis is
/// not detected here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    /// Vertical field of view in degrees
    vfov: f32,

    // Cached basis (w points away from the view direction)
    u: Vec3,
    v: Vec3,
    w: Vec3,
    half_height: f32,
}

impl Camera {
    /// Create a camera at `look_from` looking toward `look_at`.
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32) -> Self {
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            look_from,
            look_at,
            vup,
            vfov,
            u,
            v,
            w,
            half_height: (vfov.to_radians() / 2.0).tan(),
        }
    }

    /// Generate the ray through image-plane point `(s, t)`.
    ///
    /// `s` runs left to right and `t` bottom to top, both over `[0, 1]`.
    /// `aspect` is width over height. The returned direction is unit length.
    pub fn get_ray(&self, s: f32, t: f32, aspect: f32) -> Ray {
        let half_width = aspect * self.half_height;
        let horizontal = 2.0 * half_width * self.u;
        let vertical = 2.0 * self.half_height * self.v;

        // Viewport sits at unit distance in front of the eye
        let lower_left = self.look_from - horizontal / 2.0 - vertical / 2.0 - self.w;
        let direction = lower_left + s * horizontal + t * vertical - self.look_from;

        Ray::new(self.look_from, direction.normalize())
    }

    pub fn look_from(&self) -> Vec3 {
        self.look_from
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.vup
    }

    pub fn vfov(&self) -> f32 {
        self.vfov
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 45.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y, 45.0);

        assert!((camera.w - Vec3::Z).length() < 1e-6);
        assert!((camera.u - Vec3::X).length() < 1e-6);
        assert!((camera.v - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, -7.0), Vec3::Y, 60.0);
        let ray = camera.get_ray(0.5, 0.5, 16.0 / 9.0);

        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays_span_field_of_view() {
        let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0);

        // tan(45 deg) = 1, so the top edge is at 45 degrees
        let top = camera.get_ray(0.5, 1.0, 1.0).direction();
        assert!((top - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < 1e-5);

        // Aspect 2 doubles the horizontal extent
        let right = camera.get_ray(1.0, 0.5, 2.0).direction();
        assert!((right - Vec3::new(2.0, 0.0, -1.0).normalize()).length() < 1e-5);

        let lower_left = camera.get_ray(0.0, 0.0, 1.0).direction();
        assert!(lower_left.x < 0.0 && lower_left.y < 0.0 && lower_left.z < 0.0);
    }

    #[test]
    fn test_ray_directions_are_unit() {
        let camera = Camera::new(Vec3::new(4.0, 4.0, 4.0), Vec3::ZERO, Vec3::Y, 30.0);
        for (s, t) in [(0.0, 0.0), (0.25, 0.75), (1.0, 1.0)] {
            let ray = camera.get_ray(s, t, 1.5);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        }
    }
}
