use glam::Vec3;
use log::info;

use crate::config::SPHERE_SUBDIVISION_LEVEL;
use crate::error::{Result, SimulationError};

/// Triangle-soup unit sphere shared read-only by every particle draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereMesh {
    /// Three consecutive positions per triangle.
    pub positions: Vec<Vec3>,
    /// One normal per position.
    pub normals: Vec<Vec3>,
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Flattened `[x, y, z, ...]` positions ready for a vertex buffer upload.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Checks that the buffers describe whole triangles with matching normals.
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() {
            return Err(SimulationError::MeshGeneration("mesh has no vertices".into()));
        }
        if self.positions.len() % 3 != 0 {
            return Err(SimulationError::MeshGeneration(format!(
                "{} vertices do not form whole triangles",
                self.positions.len()
            )));
        }
        if self.normals.len() != self.positions.len() {
            return Err(SimulationError::MeshGeneration(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                self.positions.len()
            )));
        }
        Ok(())
    }
}

/// Produces the sphere mesh once at startup.
pub trait MeshSource {
    fn generate(&self) -> Result<SphereMesh>;
}

/// Unit sphere built by recursively splitting a tetrahedron and projecting
/// the new vertices onto the sphere. Level `n` yields `4^(n+1)` triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdividedTetrahedron {
    pub level: u32,
}

impl Default for SubdividedTetrahedron {
    fn default() -> Self {
        Self {
            level: SPHERE_SUBDIVISION_LEVEL,
        }
    }
}

impl SubdividedTetrahedron {
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    fn divide_triangle(a: Vec3, b: Vec3, c: Vec3, depth: u32, mesh: &mut SphereMesh) {
        if depth == 0 {
            for vertex in [a, b, c] {
                mesh.positions.push(vertex);
                // Unit sphere: the normal is the position.
                mesh.normals.push(vertex);
            }
            return;
        }

        let ab = a.lerp(b, 0.5).normalize();
        let ac = a.lerp(c, 0.5).normalize();
        let bc = b.lerp(c, 0.5).normalize();

        Self::divide_triangle(a, ab, ac, depth - 1, mesh);
        Self::divide_triangle(ab, b, bc, depth - 1, mesh);
        Self::divide_triangle(bc, c, ac, depth - 1, mesh);
        Self::divide_triangle(ab, bc, ac, depth - 1, mesh);
    }
}

impl MeshSource for SubdividedTetrahedron {
    fn generate(&self) -> Result<SphereMesh> {
        let a = Vec3::new(0.0, 0.0, -1.0);
        let b = Vec3::new(0.0, 0.942809, 0.333333).normalize();
        let c = Vec3::new(-0.816497, -0.471405, 0.333333).normalize();
        let d = Vec3::new(0.816497, -0.471405, 0.333333).normalize();

        let triangles = 4usize.pow(self.level + 1);
        let mut mesh = SphereMesh {
            positions: Vec::with_capacity(triangles * 3),
            normals: Vec::with_capacity(triangles * 3),
        };

        Self::divide_triangle(a, b, c, self.level, &mut mesh);
        Self::divide_triangle(d, c, b, self.level, &mut mesh);
        Self::divide_triangle(a, d, b, self.level, &mut mesh);
        Self::divide_triangle(a, c, d, self.level, &mut mesh);

        info!(
            "Generated {} triangles, {} normals",
            mesh.triangle_count(),
            mesh.normals.len()
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn triangle_count_grows_by_four_per_level() {
        for level in 0..4 {
            let mesh = SubdividedTetrahedron::new(level).generate().unwrap();
            assert_eq!(mesh.triangle_count(), 4usize.pow(level + 1));
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn vertices_lie_on_unit_sphere() {
        let mesh = SubdividedTetrahedron::new(3).generate().unwrap();
        for p in &mesh.positions {
            assert_abs_diff_eq!(p.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn mismatched_normals_fail_validation() {
        let mut mesh = SubdividedTetrahedron::new(0).generate().unwrap();
        mesh.normals.pop();
        assert!(matches!(mesh.validate(), Err(SimulationError::MeshGeneration(_))));
    }

    #[test]
    fn flattened_buffers_have_three_floats_per_vertex() {
        let mesh = SubdividedTetrahedron::new(1).generate().unwrap();
        assert_eq!(mesh.position_buffer().len(), mesh.vertex_count() * 3);
        assert_eq!(mesh.normal_buffer().len(), mesh.vertex_count() * 3);
    }
}
