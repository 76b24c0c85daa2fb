use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    config::SimulationConfig,
    core::{clock::SimulationClock, particle::ParticleId, store::ParticleStore},
    dynamics::stepper::{PhysicsStepper, StepStats},
    error::Result,
    utils::profiling::ScopedTimer,
};

/// Everything a running session owns: particles, clock, stepper and spawn RNG.
pub struct SimulationState {
    config: SimulationConfig,
    store: ParticleStore,
    clock: SimulationClock,
    stepper: PhysicsStepper,
    rng: StdRng,
}

impl SimulationState {
    /// Builds a session seeded from OS entropy.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds a session with a reproducible spawn sequence.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        debug!(
            "simulation state created: capacity {}, half extent {}, parallel {}",
            config.max_particles, config.arena_half_extent, config.parallel
        );
        Ok(Self {
            store: ParticleStore::from_config(&config),
            clock: SimulationClock::new(),
            stepper: PhysicsStepper::from_config(&config),
            config,
            rng,
        })
    }

    /// Runs exactly one physics tick.
    pub fn step(&mut self) -> StepStats {
        let _timer = ScopedTimer::new("physics::step");
        self.stepper.step(&mut self.store, &mut self.clock)
    }

    /// Appends one particle born at the current tick.
    pub fn spawn(&mut self) -> Result<ParticleId> {
        self.store.spawn(&mut self.rng, self.clock.tick())
    }

    /// Saturating bulk spawn; returns how many particles were created.
    pub fn spawn_many(&mut self, requested: usize) -> usize {
        self.store.spawn_many(&mut self.rng, self.clock.tick(), requested)
    }

    pub fn reset(&mut self) {
        self.store.clear();
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.stepper.set_parallel(enabled);
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn stepper(&self) -> &PhysicsStepper {
        &self.stepper
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// A [`SimulationState`] shared between a frame thread and event sources.
///
/// Every operation takes the lock for its full duration, so a spawn or reset
/// issued while a step is running lands on the step boundary.
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<SimulationState>>,
}

impl SharedSimulation {
    pub fn new(state: SimulationState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn step(&self) -> StepStats {
        self.inner.lock().step()
    }

    pub fn spawn_many(&self, requested: usize) -> usize {
        self.inner.lock().spawn_many(requested)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn particle_count(&self) -> usize {
        self.inner.lock().particle_count()
    }

    /// Exclusive access for multi-operation transactions such as rendering.
    pub fn lock(&self) -> MutexGuard<'_, SimulationState> {
        self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_uses_current_tick_as_birth() {
        let mut state = SimulationState::with_seed(SimulationConfig::default(), 9).unwrap();
        state.step();
        state.step();
        let id = state.spawn().unwrap();
        assert_eq!(state.store().get(id).unwrap().birth_tick(), 2);
    }

    #[test]
    fn reset_keeps_the_clock() {
        let mut state = SimulationState::with_seed(SimulationConfig::default(), 9).unwrap();
        state.spawn_many(10);
        state.step();
        state.reset();
        assert_eq!(state.particle_count(), 0);
        assert_eq!(state.clock().tick(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimulationConfig {
            max_particles: 0,
            ..SimulationConfig::default()
        };
        assert!(SimulationState::new(config).is_err());
    }

    #[test]
    fn same_seed_gives_same_particles() {
        let mut a = SimulationState::with_seed(SimulationConfig::default(), 77).unwrap();
        let mut b = SimulationState::with_seed(SimulationConfig::default(), 77).unwrap();
        a.spawn_many(25);
        b.spawn_many(25);
        assert_eq!(a.store().as_slice(), b.store().as_slice());
    }
}
