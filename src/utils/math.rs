//! Additional math helpers layered on top of `glam`.

use glam::Vec3;

/// Reflects `v` about the unit surface normal `n`: `v - 2 (n·v) n`.
///
/// The bounce is lossless; `|reflect(v, n)| == |v|` up to rounding.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * n.dot(v) * n
}

/// Translates degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reflect_flips_normal_component_only() {
        let v = Vec3::new(0.05, -0.02, 0.1);
        let r = reflect(v, Vec3::new(-1.0, 0.0, 0.0));
        assert_abs_diff_eq!(r.x, -0.05, epsilon = 1e-7);
        assert_eq!(r.y, -0.02);
        assert_eq!(r.z, 0.1);
    }

    #[test]
    fn reflect_preserves_speed() {
        let v = Vec3::new(0.3, -0.7, 0.2);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert_abs_diff_eq!(reflect(v, n).length(), v.length(), epsilon = 1e-6);
    }

    #[test]
    fn deg_to_rad_quarter_turn() {
        assert_abs_diff_eq!(deg_to_rad(90.0), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    }
}
