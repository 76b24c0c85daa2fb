use glam::{Mat3, Mat4, Vec3};

use crate::config::{SimulationConfig, PARTICLE_RADIUS};
use crate::core::{particle::Particle, store::ParticleStore};

use super::camera::{Camera, Viewport};
use super::lighting::{Lighting, Material};
use super::transform_stack::TransformStack;

/// Uniform scale applied to the whole arena before particles are placed.
pub const SCENE_SCALE: f32 = 20.0;

/// Per-frame constants handed to a [`Renderer`](super::Renderer).
///
/// None of it depends on particle state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub view: Mat4,
    pub lighting: Lighting,
    pub material: Material,
    pub scene_scale: f32,
    pub particle_radius: f32,
}

impl FrameContext {
    pub fn new(camera: &Camera, viewport: Viewport) -> Self {
        Self {
            viewport,
            projection: camera.projection(viewport),
            view: camera.view_matrix(),
            lighting: Lighting::default(),
            material: Material::default(),
            scene_scale: SCENE_SCALE,
            particle_radius: PARTICLE_RADIUS,
        }
    }

    pub fn with_config(camera: &Camera, viewport: Viewport, config: &SimulationConfig) -> Self {
        Self {
            particle_radius: config.particle_radius,
            ..Self::new(camera, viewport)
        }
    }

    /// Inverse-transpose of the upper 3x3, for transforming normals.
    pub fn normal_matrix(model_view: Mat4) -> Mat3 {
        Mat3::from_mat4(model_view).inverse().transpose()
    }

    /// Calls `visit` with each particle's model-view matrix in store order.
    ///
    /// The scene scale is applied once; each particle adds its translation and
    /// radius inside its own scope on top of it.
    pub fn visit_particles<F>(&self, particles: &ParticleStore, mut visit: F)
    where
        F: FnMut(&Particle, Mat4),
    {
        let mut stack = TransformStack::new(self.view);
        let mut scene = stack.push();
        scene.scale(Vec3::splat(self.scene_scale));

        for particle in particles {
            let mut local = scene.push();
            local.translate(particle.position);
            local.scale(Vec3::splat(self.particle_radius));
            visit(particle, local.current());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn particle_transform_places_center_in_scaled_scene() {
        let mut store = ParticleStore::default();
        store
            .insert(Particle::new(Vec3::new(1.0, 0.5, -0.5), Vec3::ZERO, 0))
            .unwrap();

        let context = FrameContext::new(&Camera::default(), Viewport::default());
        let mut centers = Vec::new();
        context.visit_particles(&store, |_, model_view| {
            centers.push(model_view.transform_point3(Vec3::ZERO));
        });

        let expected = context
            .view
            .transform_point3(Vec3::new(1.0, 0.5, -0.5) * SCENE_SCALE);
        assert_eq!(centers.len(), 1);
        assert_abs_diff_eq!(centers[0].x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(centers[0].y, expected.y, epsilon = 1e-3);
        assert_abs_diff_eq!(centers[0].z, expected.z, epsilon = 1e-3);
    }

    #[test]
    fn normal_matrix_of_uniform_scale_is_reciprocal() {
        let normal = FrameContext::normal_matrix(Mat4::from_scale(Vec3::splat(2.0)));
        assert_abs_diff_eq!(normal.x_axis.x, 0.5, epsilon = 1e-6);
    }
}
