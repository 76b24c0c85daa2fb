//! Model constants and the runtime configuration for the Particle Box simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Hard cap on live particles. Requests beyond it are truncated, never rejected.
pub const MAX_PARTICLES: usize = 400;

/// Half-extent of the axis-aligned arena cube centered at the origin.
pub const ARENA_HALF_EXTENT: f32 = 1.2;

/// Velocity change applied every tick (Y-up).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -0.0059, 0.0];

/// Per-tick drag base; the decay over `age` ticks is `FRICTION_BASE^age`.
pub const FRICTION_BASE: f32 = 0.99999;

/// Inclusive range each initial velocity component is sampled from.
pub const SPAWN_VELOCITY_RANGE: (f32, f32) = (0.05, 0.15);

/// Visual radius of a rendered particle.
pub const PARTICLE_RADIUS: f32 = 0.1;

/// Frame time budget used for the over-budget warning (60 Hz display).
pub const FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;

/// Subdivision level of the shared sphere mesh.
pub const SPHERE_SUBDIVISION_LEVEL: u32 = 6;

/// Tunable parameters of a simulation session.
///
/// `Default` reproduces the module constants exactly. Every field may be
/// omitted from a TOML document and falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_particles: usize,
    pub arena_half_extent: f32,
    pub gravity: Vec3,
    pub friction_base: f32,
    pub spawn_velocity_min: f32,
    pub spawn_velocity_max: f32,
    pub particle_radius: f32,
    pub frame_budget_ms: f32,
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            arena_half_extent: ARENA_HALF_EXTENT,
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            friction_base: FRICTION_BASE,
            spawn_velocity_min: SPAWN_VELOCITY_RANGE.0,
            spawn_velocity_max: SPAWN_VELOCITY_RANGE.1,
            particle_radius: PARTICLE_RADIUS,
            frame_budget_ms: FRAME_BUDGET_MS,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|err| SimulationError::ConfigParse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the parameters describe a well-formed physics model.
    pub fn validate(&self) -> Result<()> {
        if self.max_particles == 0 || self.max_particles > MAX_PARTICLES {
            return Err(SimulationError::InvalidConfig(format!(
                "max_particles must lie in 1..={MAX_PARTICLES}, got {}",
                self.max_particles
            )));
        }
        if !(self.arena_half_extent.is_finite() && self.arena_half_extent > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "arena_half_extent must be positive, got {}",
                self.arena_half_extent
            )));
        }
        if !(self.friction_base > 0.0 && self.friction_base <= 1.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "friction_base must lie in (0, 1], got {}",
                self.friction_base
            )));
        }
        if !(self.spawn_velocity_min.is_finite()
            && self.spawn_velocity_max.is_finite()
            && self.spawn_velocity_min <= self.spawn_velocity_max)
        {
            return Err(SimulationError::InvalidConfig(format!(
                "spawn velocity range [{}, {}] is empty",
                self.spawn_velocity_min, self.spawn_velocity_max
            )));
        }
        if !self.gravity.is_finite() {
            return Err(SimulationError::InvalidConfig(
                "gravity must be finite".into(),
            ));
        }
        if self.particle_radius <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "particle_radius must be positive, got {}",
                self.particle_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_model_constants() {
        let config = SimulationConfig::default();
        assert_eq!(config.max_particles, 400);
        assert_eq!(config.arena_half_extent, 1.2);
        assert_eq!(config.gravity, Vec3::new(0.0, -0.0059, 0.0));
        assert_eq!(config.friction_base, 0.99999);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = SimulationConfig::from_toml_str("max_particles = 50\nparallel = true\n")
            .expect("valid document");
        assert_eq!(config.max_particles, 50);
        assert!(config.parallel);
        assert_eq!(config.arena_half_extent, ARENA_HALF_EXTENT);
    }

    #[test]
    fn rejects_inverted_velocity_range() {
        let text = "spawn_velocity_min = 0.2\nspawn_velocity_max = 0.1\n";
        assert!(matches!(
            SimulationConfig::from_toml_str(text),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_capacity_above_the_particle_cap() {
        assert!(matches!(
            SimulationConfig::from_toml_str("max_particles = 1000\n"),
            Err(SimulationError::InvalidConfig(_))
        ));
        let at_cap = SimulationConfig {
            max_particles: MAX_PARTICLES,
            ..SimulationConfig::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn rejects_friction_above_one() {
        let config = SimulationConfig {
            friction_base: 1.5,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            SimulationConfig::from_toml_str("max_particles = ["),
            Err(SimulationError::ConfigParse(_))
        ));
    }
}
