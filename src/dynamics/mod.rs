//! Simulation dynamics: per-tick forces, arena boundary handling, and the stepper.

pub mod boundary;
pub mod forces;
pub mod stepper;

pub use boundary::{ArenaBounds, BoundaryHits};
pub use forces::{drag_decay, AgeDrag, GravityForce, ParticleForce};
pub use stepper::{PhysicsStepper, StepStats};
