//! Blinn-Phong surface description.

use glint_math::Vec3;

/// Color type alias (linear RGB, not bounded to 0-1)
pub type Color = Vec3;

/// Surface reflectance parameters.
///
/// A plain value type, copied into every primitive at creation time. The
/// specular color doubles as the mirror reflectivity during tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Scaled by the scene's global ambient term
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Added unconditionally, independent of lights
    pub emission: Color,
    /// Blinn-Phong exponent; 0 disables the specular highlight
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.2),
            diffuse: Color::splat(0.8),
            specular: Color::ZERO,
            emission: Color::ZERO,
            shininess: 0.0,
        }
    }
}

impl Material {
    /// A purely diffuse material with no ambient response.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_specular(mut self, specular: Color, shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess.max(0.0);
        self
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// True if any specular channel is nonzero, which makes the surface
    /// spawn reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.specular.length_squared() > 0.0
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
