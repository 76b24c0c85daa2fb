//! Core simulation state: particle records, the particle store, and the tick clock.

pub mod clock;
pub mod particle;
pub mod store;

pub use clock::SimulationClock;
pub use particle::{Particle, ParticleId};
pub use store::{ParticleStore, SpawnPolicy};
