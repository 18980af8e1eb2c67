//! Directional and point lights.

use crate::Color;
use glint_math::Vec3;

/// What a light contributes at a given surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Unit vector from the point toward the light
    pub direction: Vec3,
    /// Light color after attenuation
    pub intensity: Color,
    /// True for lights at infinity
    pub is_directional: bool,
    /// Distance to the light; `f32::INFINITY` for directional lights.
    /// Used as the shadow ray's upper bound.
    pub distance: f32,
}

/// Trait for anything that can illuminate a surface point.
pub trait LightSource: Send + Sync {
    fn light_info(&self, point: Vec3) -> LightSample;
}

/// A light infinitely far away, shining along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    color: Color,
}

impl DirectionalLight {
    /// `direction` is the direction light travels in; it is normalized here.
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction: direction.normalize(),
            color,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl LightSource for DirectionalLight {
    fn light_info(&self, _point: Vec3) -> LightSample {
        LightSample {
            direction: -self.direction,
            intensity: self.color,
            is_directional: true,
            distance: f32::INFINITY,
        }
    }
}

/// Point light falloff: `1 / (constant + linear*d + quadratic*d^2)`.
///
/// The denominator is not checked. Coefficients must keep it positive
/// for every distance the light can reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    /// No falloff.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    #[inline]
    pub fn denominator(&self, distance: f32) -> f32 {
        self.constant + self.linear * distance + self.quadratic * distance * distance
    }
}

/// A light at a position radiating in all directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Vec3,
    color: Color,
    attenuation: Attenuation,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, attenuation: Attenuation) -> Self {
        Self {
            position,
            color,
            attenuation,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }
}

impl LightSource for PointLight {
    fn light_info(&self, point: Vec3) -> LightSample {
        let to_light = self.position - point;
        let distance = to_light.length();

        LightSample {
            direction: to_light / distance,
            intensity: self.color / self.attenuation.denominator(distance),
            is_directional: false,
            distance,
        }
    }
}

/// Any light a scene can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl LightSource for Light {
    fn light_info(&self, point: Vec3) -> LightSample {
        match self {
            Light::Directional(light) => light.light_info(point),
            Light::Point(light) => light.light_info(point),
        }
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_light_info() {
        let light = DirectionalLight::new(Vec3::new(0.0, -2.0, 0.0), Color::ONE);
        let sample = light.light_info(Vec3::new(3.0, 4.0, 5.0));

        assert_eq!(sample.direction, Vec3::Y);
        assert_eq!(sample.intensity, Color::ONE);
        assert!(sample.is_directional);
        assert_eq!(sample.distance, f32::INFINITY);
    }

    #[test]
    fn test_directional_light_ignores_position() {
        let light = Light::from(DirectionalLight::new(Vec3::new(1.0, -1.0, 0.0), Color::ONE));
        assert_eq!(light.light_info(Vec3::ZERO), light.light_info(Vec3::splat(100.0)));
    }

    #[test]
    fn test_point_light_unattenuated() {
        let light = PointLight::new(Vec3::new(0.0, 4.0, 0.0), Color::splat(0.5), Attenuation::default());
        let sample = light.light_info(Vec3::ZERO);

        assert!((sample.direction - Vec3::Y).length() < 1e-6);
        assert!((sample.distance - 4.0).abs() < 1e-6);
        assert_eq!(sample.intensity, Color::splat(0.5));
        assert!(!sample.is_directional);
    }

    #[test]
    fn test_point_light_attenuation() {
        let attenuation = Attenuation::new(1.0, 0.5, 0.25);
        let light = Light::from(PointLight::new(Vec3::new(2.0, 0.0, 0.0), Color::ONE, attenuation));
        let sample = light.light_info(Vec3::ZERO);

        // 1 + 0.5*2 + 0.25*4 = 3
        assert!((sample.intensity - Color::splat(1.0 / 3.0)).length() < 1e-6);
        assert!((sample.direction - Vec3::X).length() < 1e-6);
    }
}
