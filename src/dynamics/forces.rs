use glam::Vec3;

use crate::config::{DEFAULT_GRAVITY, FRICTION_BASE};
use crate::core::particle::Particle;

/// Per-tick velocity modifier applied to each particle.
pub trait ParticleForce: Send + Sync {
    fn apply(&self, particle: &mut Particle, tick: u64);
}

/// `friction_base^age`, the drag decay for a particle of the given age.
#[inline]
pub fn drag_decay(friction_base: f32, age: u64) -> f32 {
    if age == 0 {
        return 1.0;
    }
    (friction_base as f64).powf(age as f64) as f32
}

/// Constant velocity change per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityForce {
    pub gravity: Vec3,
}

impl Default for GravityForce {
    fn default() -> Self {
        Self::new(Vec3::from_array(DEFAULT_GRAVITY))
    }
}

impl GravityForce {
    pub fn new(gravity: Vec3) -> Self {
        Self { gravity }
    }
}

impl ParticleForce for GravityForce {
    fn apply(&self, particle: &mut Particle, _tick: u64) {
        particle.velocity += self.gravity;
    }
}

/// Age-dependent drag: velocity is scaled by `friction_base^age` every tick.
///
/// The exponent is recomputed from the particle's age on every step rather than
/// accumulated, so older particles lose speed faster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeDrag {
    pub friction_base: f32,
}

impl Default for AgeDrag {
    fn default() -> Self {
        Self::new(FRICTION_BASE)
    }
}

impl AgeDrag {
    pub fn new(friction_base: f32) -> Self {
        Self { friction_base }
    }

    pub fn decay_at(&self, age: u64) -> f32 {
        drag_decay(self.friction_base, age)
    }
}

impl ParticleForce for AgeDrag {
    fn apply(&self, particle: &mut Particle, tick: u64) {
        particle.velocity *= self.decay_at(particle.age(tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn decay_is_one_at_birth() {
        assert_eq!(drag_decay(FRICTION_BASE, 0), 1.0);
    }

    #[test]
    fn decay_strictly_decreases_with_age() {
        let drag = AgeDrag::default();
        let mut previous = drag.decay_at(0);
        for age in [1, 10, 100, 1_000, 10_000] {
            let current = drag.decay_at(age);
            assert!(current < previous, "decay at {age} = {current} >= {previous}");
            previous = current;
        }
    }

    #[test]
    fn decay_matches_repeated_multiplication() {
        let mut incremental = 1.0_f64;
        for _ in 0..500 {
            incremental *= FRICTION_BASE as f64;
        }
        assert_relative_eq!(
            drag_decay(FRICTION_BASE, 500),
            incremental as f32,
            max_relative = 1e-6
        );
    }

    #[test]
    fn gravity_only_touches_y() {
        let mut particle = Particle::new(Vec3::ZERO, Vec3::new(0.1, 0.1, 0.1), 0);
        GravityForce::default().apply(&mut particle, 0);
        assert_eq!(particle.velocity.x, 0.1);
        assert_relative_eq!(particle.velocity.y, 0.1 - 0.0059);
        assert_eq!(particle.velocity.z, 0.1);
    }

    #[test]
    fn drag_uses_particle_age() {
        let mut young = Particle::new(Vec3::ZERO, Vec3::ONE, 100);
        let mut old = Particle::new(Vec3::ZERO, Vec3::ONE, 0);
        let drag = AgeDrag::default();
        drag.apply(&mut young, 100);
        drag.apply(&mut old, 100);
        assert_eq!(young.velocity, Vec3::ONE);
        assert!(old.velocity.x < young.velocity.x);
    }
}
