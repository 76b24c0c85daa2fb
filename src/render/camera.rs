use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::utils::math::deg_to_rad;

/// Output surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Fixed look-at camera with a perspective projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub view_dir: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, -1.0, 100.0),
            view_dir: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.view_dir, self.up)
    }

    /// OpenGL-style clip space (depth in `[-1, 1]`).
    pub fn projection(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh_gl(
            deg_to_rad(self.fov_y_degrees),
            viewport.aspect(),
            self.near,
            self.far,
        )
    }
}
