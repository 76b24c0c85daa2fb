use glam::{Mat3, Mat4};
use log::info;

use crate::core::store::ParticleStore;
use crate::error::{Result, SimulationError};

use super::frame::FrameContext;
use super::mesh::SphereMesh;
use super::Renderer;

/// One sphere draw as it would be submitted to the GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub model_view: Mat4,
    pub normal_matrix: Mat3,
    pub vertex_count: usize,
}

/// Headless renderer that records the draw calls of the latest frame.
#[derive(Debug, Default)]
pub struct DrawListRenderer {
    commands: Vec<DrawCommand>,
    last_frame: Option<FrameContext>,
    mesh_vertices: usize,
    frames_drawn: u64,
    initialized: bool,
}

impl DrawListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn last_frame(&self) -> Option<&FrameContext> {
        self.last_frame.as_ref()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Renderer for DrawListRenderer {
    fn name(&self) -> &str {
        "headless-draw-list"
    }

    fn initialize(&mut self, mesh: &SphereMesh) -> Result<()> {
        if mesh.vertex_count() == 0 {
            return Err(SimulationError::RendererInit(
                "cannot upload an empty sphere mesh".into(),
            ));
        }
        self.mesh_vertices = mesh.vertex_count();
        self.initialized = true;
        info!(
            "{} initialized with {} sphere vertices",
            self.name(),
            self.mesh_vertices
        );
        Ok(())
    }

    fn draw(&mut self, frame: &FrameContext, particles: &ParticleStore) {
        self.commands.clear();
        let vertex_count = self.mesh_vertices;
        let commands = &mut self.commands;
        frame.visit_particles(particles, |_, model_view| {
            commands.push(DrawCommand {
                model_view,
                normal_matrix: FrameContext::normal_matrix(model_view),
                vertex_count,
            });
        });
        self.last_frame = Some(*frame);
        self.frames_drawn += 1;
    }
}
