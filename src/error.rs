//! Error types for the Particle Box simulation.

use thiserror::Error;

/// Failures surfaced by the simulation and its collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// A raw spawn was attempted on a full store.
    #[error("particle store is full ({capacity} particles)")]
    CapacityExceeded { capacity: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    /// The renderer refused to initialize (missing shaders, lost context, ...).
    #[error("renderer initialization failed: {0}")]
    RendererInit(String),

    #[error("mesh generation failed: {0}")]
    MeshGeneration(String),
}

/// Convenient Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
