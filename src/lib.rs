//! Particle Box – real-time bouncing-sphere particle simulation for Rust.
//!
//! A bounded set of spheres is spawned with random positions and velocities,
//! advanced each frame under gravity and age-dependent drag, and reflected off
//! the faces of an axis-aligned cube. [`FrameLoop`] ties one physics tick to
//! one render pass per display refresh; rendering itself sits behind the
//! [`Renderer`] trait.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod render;
pub mod simulation;
pub mod utils;

pub use glam::{Mat3, Mat4, Vec3};

pub use config::{SimulationConfig, ARENA_HALF_EXTENT, MAX_PARTICLES};
pub use crate::core::{
    clock::SimulationClock,
    particle::{Particle, ParticleId},
    store::{ParticleStore, SpawnPolicy},
};
pub use dynamics::{
    boundary::{ArenaBounds, BoundaryHits},
    forces::{drag_decay, AgeDrag, GravityForce, ParticleForce},
    stepper::{PhysicsStepper, StepStats},
};
pub use error::{Result, SimulationError};
pub use frame_loop::{FrameLoop, FrameReport};
pub use input::{ControlCommand, KeyBindings};
pub use render::{
    Camera, DrawCommand, DrawListRenderer, FrameContext, MeshSource, Renderer, SphereMesh,
    SubdividedTetrahedron, TransformStack, Viewport,
};
pub use simulation::{SharedSimulation, SimulationState};
