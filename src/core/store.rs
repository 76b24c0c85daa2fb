use glam::Vec3;
use log::{debug, warn};
use rand::Rng;

use crate::config::{SimulationConfig, ARENA_HALF_EXTENT, MAX_PARTICLES, SPAWN_VELOCITY_RANGE};
use crate::error::{Result, SimulationError};

use super::particle::{Particle, ParticleId};

/// Distribution new particles are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    /// Each position component is uniform in `[-half_extent, half_extent]`.
    pub half_extent: f32,
    /// Each velocity component is uniform in `[velocity_min, velocity_max]`.
    pub velocity_min: f32,
    pub velocity_max: f32,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
            velocity_min: SPAWN_VELOCITY_RANGE.0,
            velocity_max: SPAWN_VELOCITY_RANGE.1,
        }
    }
}

impl SpawnPolicy {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            half_extent: config.arena_half_extent,
            velocity_min: config.spawn_velocity_min,
            velocity_max: config.spawn_velocity_max,
        }
    }

    /// Draws one particle born at `tick`.
    ///
    /// All three velocity components are positive, so every particle starts
    /// out heading into the positive octant.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, tick: u64) -> Particle {
        let h = self.half_extent;
        let position = Vec3::new(
            rng.gen_range(-h..=h),
            rng.gen_range(-h..=h),
            rng.gen_range(-h..=h),
        );
        let (lo, hi) = (self.velocity_min, self.velocity_max);
        let velocity = Vec3::new(
            rng.gen_range(lo..=hi),
            rng.gen_range(lo..=hi),
            rng.gen_range(lo..=hi),
        );
        Particle::new(position, velocity, tick)
    }
}

/// Bounded, append-only arena of live particles.
///
/// Insertion order is iteration and render order. Particles are never removed
/// individually; [`ParticleStore::clear`] drops all of them and invalidates
/// every outstanding [`ParticleId`].
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    capacity: usize,
    epoch: u32,
    policy: SpawnPolicy,
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new(MAX_PARTICLES)
    }
}

impl ParticleStore {
    /// Creates a store holding at most `capacity` particles, never more than
    /// [`MAX_PARTICLES`].
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, SpawnPolicy::default())
    }

    pub fn with_policy(capacity: usize, policy: SpawnPolicy) -> Self {
        let capacity = capacity.min(MAX_PARTICLES);
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            epoch: 0,
            policy,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::with_policy(config.max_particles, SpawnPolicy::from_config(config))
    }

    /// Appends one randomly initialized particle born at `tick`.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, tick: u64) -> Result<ParticleId> {
        if self.particles.len() >= self.capacity {
            return Err(SimulationError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.push(self.policy.sample(rng, tick)))
    }

    /// Spawns up to `requested` particles, saturating at capacity.
    ///
    /// Returns how many were actually created, which may be zero.
    pub fn spawn_many<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        tick: u64,
        requested: usize,
    ) -> usize {
        let admitted = requested.min(self.remaining_capacity());
        if admitted < requested {
            warn!(
                "spawn request truncated: {requested} requested, {admitted} admitted (capacity {})",
                self.capacity
            );
        }
        for _ in 0..admitted {
            let particle = self.policy.sample(rng, tick);
            self.push(particle);
        }
        debug!("spawned {admitted} particles at tick {tick}, {} live", self.len());
        admitted
    }

    /// Inserts a fully specified particle, subject to the same capacity rule as `spawn`.
    pub fn insert(&mut self, particle: Particle) -> Result<ParticleId> {
        if self.particles.len() >= self.capacity {
            return Err(SimulationError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.push(particle))
    }

    /// Removes every particle and invalidates all handles.
    pub fn clear(&mut self) {
        let dropped = self.particles.len();
        self.particles.clear();
        self.epoch = self.epoch.wrapping_add(1);
        debug!("store cleared ({dropped} particles dropped), epoch {}", self.epoch);
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        if id.epoch() == self.epoch {
            self.particles.get(id.index())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        if id.epoch() == self.epoch {
            self.particles.get_mut(id.index())
        } else {
            None
        }
    }

    /// Particle at position `index` in insertion order.
    pub fn at(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticleId> + '_ {
        (0..self.particles.len()).map(move |index| ParticleId::new(index, self.epoch))
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.particles.len())
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn spawn_policy(&self) -> &SpawnPolicy {
        &self.policy
    }

    fn push(&mut self, particle: Particle) -> ParticleId {
        let id = ParticleId::new(self.particles.len(), self.epoch);
        self.particles.push(particle);
        id
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
