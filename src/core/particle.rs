use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Handle to a particle, tagged with the store epoch it was created in.
///
/// Clearing the store bumps the epoch, so handles from before a reset no
/// longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ParticleId {
    pub index: usize,
    pub epoch: u32,
}

impl ParticleId {
    pub fn new(index: usize, epoch: u32) -> Self {
        Self { index, epoch }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

/// One simulated sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    /// Position units per tick.
    pub velocity: Vec3,
    birth_tick: u64,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, birth_tick: u64) -> Self {
        Self {
            position,
            velocity,
            birth_tick,
        }
    }

    pub fn birth_tick(&self) -> u64 {
        self.birth_tick
    }

    /// Ticks elapsed since birth as seen at `tick`.
    pub fn age(&self, tick: u64) -> u64 {
        tick.saturating_sub(self.birth_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_counts_ticks_since_birth() {
        let particle = Particle::new(Vec3::ZERO, Vec3::ZERO, 7);
        assert_eq!(particle.age(7), 0);
        assert_eq!(particle.age(10), 3);
    }

    #[test]
    fn age_never_goes_negative() {
        let particle = Particle::new(Vec3::ZERO, Vec3::ZERO, 7);
        assert_eq!(particle.age(3), 0);
    }
}
