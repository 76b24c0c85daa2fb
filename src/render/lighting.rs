use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Single point light uploaded once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            position: Vec3::splat(20.0),
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
        }
    }
}

/// Phong material shared by every particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        let amber = Vec3::new(244.0, 188.0, 66.0) / 255.0;
        Self {
            ambient: amber,
            diffuse: amber,
            specular: Vec3::ONE,
            shininess: 100.0,
        }
    }
}

impl Material {
    /// Ambient and diffuse set to a `#RRGGBB` colour, white specular.
    pub fn from_hex(hex: &str, shininess: f32) -> Option<Self> {
        let colour = color_from_hex(hex)?;
        Some(Self {
            ambient: colour,
            diffuse: colour,
            specular: Vec3::ONE,
            shininess,
        })
    }
}

/// Parses `#RRGGBB` (leading `#` optional) into normalized RGB.
pub fn color_from_hex(hex: &str) -> Option<Vec3> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|value| value as f32 / 255.0)
    };
    Some(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_matches_default_material() {
        let material = Material::from_hex("#F4BC42", 100.0).unwrap();
        assert_eq!(material, Material::default());
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(color_from_hex("#F4BC4").is_none());
        assert!(color_from_hex("zzzzzz").is_none());
    }
}
