use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ARENA_HALF_EXTENT;
use crate::core::particle::Particle;
use crate::utils::math::reflect;

/// Which arena faces a particle was pushed back from during one resolve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryHits {
    /// Per axis: `1` for the positive face, `-1` for the negative face, `0` for none.
    pub faces: [i8; 3],
}

impl BoundaryHits {
    pub fn count(&self) -> usize {
        self.faces.iter().filter(|face| **face != 0).count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

/// Static axis-aligned cube centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub half_extent: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(ARENA_HALF_EXTENT)
    }
}

impl ArenaBounds {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.abs().max_element() <= self.half_extent
    }

    /// Reflects and clamps a particle that left the cube during integration.
    ///
    /// Axes are handled in x, y, z order, each against the state left by the
    /// previous axis. Per axis at most one face fires.
    pub fn resolve(&self, particle: &mut Particle) -> BoundaryHits {
        let b = self.half_extent;
        let mut hits = BoundaryHits::default();

        for axis in 0..3 {
            let mut inward = Vec3::ZERO;
            if particle.position[axis] > b {
                inward[axis] = -1.0;
                particle.velocity = reflect(particle.velocity, inward);
                particle.position[axis] = b;
                hits.faces[axis] = 1;
            } else if particle.position[axis] < -b {
                inward[axis] = 1.0;
                particle.velocity = reflect(particle.velocity, inward);
                particle.position[axis] = -b;
                hits.faces[axis] = -1;
            }
        }

        hits
    }
}
