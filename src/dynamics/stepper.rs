#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::core::{clock::SimulationClock, particle::Particle, store::ParticleStore};

use super::boundary::ArenaBounds;
use super::forces::{AgeDrag, GravityForce, ParticleForce};

/// Summary of one physics tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    /// Clock value the particle ages were measured against.
    pub tick: u64,
    pub particles: usize,
    /// Number of face reflections, counted per axis.
    pub reflections: usize,
}

/// Advances every particle by one tick: drag, gravity, explicit Euler, then
/// boundary reflection.
///
/// Particles only interact with the static arena, never with each other, so
/// the per-particle updates are independent and may run in parallel.
#[derive(Debug, Clone)]
pub struct PhysicsStepper {
    pub drag: AgeDrag,
    pub gravity: GravityForce,
    pub bounds: ArenaBounds,
    parallel: bool,
}

impl Default for PhysicsStepper {
    fn default() -> Self {
        Self {
            drag: AgeDrag::default(),
            gravity: GravityForce::default(),
            bounds: ArenaBounds::default(),
            parallel: false,
        }
    }
}

impl PhysicsStepper {
    pub fn new(drag: AgeDrag, gravity: GravityForce, bounds: ArenaBounds) -> Self {
        Self {
            drag,
            gravity,
            bounds,
            parallel: false,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut stepper = Self::new(
            AgeDrag::new(config.friction_base),
            GravityForce::new(config.gravity),
            ArenaBounds::new(config.arena_half_extent),
        );
        stepper.set_parallel(config.parallel);
        stepper
    }

    /// Requests data-parallel particle updates. Ignored without the `parallel` feature.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled && cfg!(feature = "parallel");
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Runs one tick over the whole store, then advances the clock by one.
    ///
    /// Ages are read against the clock value *before* the increment, so a
    /// particle spawned at tick `t` sees age 0 on its first step.
    pub fn step(&self, store: &mut ParticleStore, clock: &mut SimulationClock) -> StepStats {
        let tick = clock.tick();
        let particles = store.len();
        let reflections = self.integrate_all(store.as_mut_slice(), tick);
        clock.advance();

        StepStats {
            tick,
            particles,
            reflections,
        }
    }

    /// Updates a single particle and returns how many faces it bounced off.
    pub fn advance_particle(&self, particle: &mut Particle, tick: u64) -> usize {
        self.drag.apply(particle, tick);
        self.gravity.apply(particle, tick);
        particle.position += particle.velocity;
        self.bounds.resolve(particle).count()
    }

    #[cfg(feature = "parallel")]
    fn integrate_all(&self, particles: &mut [Particle], tick: u64) -> usize {
        if self.parallel {
            particles
                .par_iter_mut()
                .map(|particle| self.advance_particle(particle, tick))
                .sum()
        } else {
            self.integrate_sequential(particles, tick)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn integrate_all(&self, particles: &mut [Particle], tick: u64) -> usize {
        self.integrate_sequential(particles, tick)
    }

    fn integrate_sequential(&self, particles: &mut [Particle], tick: u64) -> usize {
        particles
            .iter_mut()
            .map(|particle| self.advance_particle(particle, tick))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    fn single(position: Vec3, velocity: Vec3, birth: u64) -> ParticleStore {
        let mut store = ParticleStore::default();
        store
            .insert(Particle::new(position, velocity, birth))
            .expect("empty store has room");
        store
    }

    #[test]
    fn reflection_at_positive_x_face() {
        let mut store = single(Vec3::new(1.19, 0.0, 0.0), Vec3::new(0.05, 0.0, 0.0), 0);
        let mut clock = SimulationClock::new();
        let stats = PhysicsStepper::default().step(&mut store, &mut clock);

        let particle = store.at(0).unwrap();
        assert_eq!(particle.position.x, 1.2);
        assert_abs_diff_eq!(particle.velocity.x, -0.05, epsilon = 1e-7);
        assert_abs_diff_eq!(particle.velocity.y, -0.0059, epsilon = 1e-7);
        assert_abs_diff_eq!(particle.position.y, -0.0059, epsilon = 1e-7);
        assert_eq!(particle.velocity.z, 0.0);
        assert_eq!(stats.reflections, 1);
        assert_eq!(stats.tick, 0);
        assert_eq!(clock.tick(), 1);
    }

    #[test]
    fn first_step_has_no_drag() {
        let velocity = Vec3::new(0.1, 0.1, 0.1);
        let mut store = single(Vec3::ZERO, velocity, 0);
        let mut clock = SimulationClock::new();
        PhysicsStepper::default().step(&mut store, &mut clock);

        let particle = store.at(0).unwrap();
        assert_eq!(particle.velocity.x, 0.1);
        assert_eq!(particle.position.x, 0.1);
    }

    #[test]
    fn empty_store_still_advances_clock() {
        let mut store = ParticleStore::default();
        let mut clock = SimulationClock::new();
        let stats = PhysicsStepper::default().step(&mut store, &mut clock);
        assert_eq!(stats, StepStats { tick: 0, particles: 0, reflections: 0 });
        assert_eq!(clock.tick(), 1);
    }

    #[test]
    fn older_particles_decay_faster() {
        let velocity = Vec3::new(0.1, 0.0, 0.0);
        let mut clock = SimulationClock::new();
        for _ in 0..1000 {
            clock.advance();
        }
        let mut young = single(Vec3::ZERO, velocity, 1000);
        let mut old = single(Vec3::ZERO, velocity, 0);
        let stepper = PhysicsStepper::default();
        stepper.step(&mut young, &mut clock.clone());
        stepper.step(&mut old, &mut clock.clone());
        assert!(old.at(0).unwrap().velocity.x < young.at(0).unwrap().velocity.x);
    }
}
