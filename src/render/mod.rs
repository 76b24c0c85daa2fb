//! Rendering boundary: the renderer contract and the CPU-side data it consumes.
//!
//! Shader compilation and GPU submission live behind [`Renderer`]
//! implementations; this module only prepares the per-frame constants, the
//! shared sphere mesh and the per-particle transforms.

pub mod camera;
pub mod draw_list;
pub mod frame;
pub mod lighting;
pub mod mesh;
pub mod transform_stack;

pub use camera::{Camera, Viewport};
pub use draw_list::{DrawCommand, DrawListRenderer};
pub use frame::{FrameContext, SCENE_SCALE};
pub use lighting::{color_from_hex, Lighting, Material};
pub use mesh::{MeshSource, SphereMesh, SubdividedTetrahedron};
pub use transform_stack::{TransformGuard, TransformStack};

use crate::core::store::ParticleStore;
use crate::error::Result;

/// Consumer of particle snapshots, one draw pass per frame.
pub trait Renderer {
    fn name(&self) -> &str;

    /// Uploads the shared sphere mesh. Stepping never starts unless this succeeds.
    fn initialize(&mut self, mesh: &SphereMesh) -> Result<()>;

    /// Draws every particle in store order.
    fn draw(&mut self, frame: &FrameContext, particles: &ParticleStore);
}
