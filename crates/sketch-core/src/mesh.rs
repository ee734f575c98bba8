use glam::Vec3;

use crate::error::{Result, SketchError};
use crate::math::triangle_normal;

/// Unindexed triangle soup: every three consecutive positions form one
/// triangle, and shared edges are stored once per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshGeometry {
    positions: Vec<Vec3>,
}

impl MeshGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self { positions: Vec::with_capacity(triangles * 3) }
    }

    /// Wrap a position list; its length must be a multiple of three.
    pub fn from_positions(positions: Vec<Vec3>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(SketchError::IncompleteTriangles(positions.len()));
        }
        Ok(Self { positions })
    }

    /// Build from interleaved `x, y, z` floats; length must be a multiple of nine.
    pub fn from_flat(flat: &[f32]) -> Result<Self> {
        if flat.len() % 9 != 0 {
            return Err(SketchError::IncompleteTriangles(flat.len()));
        }
        let positions = flat
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { positions })
    }

    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.positions.extend_from_slice(&[a, b, c]);
    }

    /// Append whole triangles. `vertices.len()` must be a multiple of three.
    pub(crate) fn extend_triangles(&mut self, vertices: &[Vec3]) {
        debug_assert_eq!(vertices.len() % 3, 0);
        self.positions.extend_from_slice(vertices);
    }

    /// Append `other` shifted by `offset`.
    pub fn append_translated(&mut self, other: &MeshGeometry, offset: Vec3) {
        self.positions.extend(other.positions.iter().map(|p| *p + offset));
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions may move, the vertex count may not.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.positions.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// One normal per vertex, equal to the normal of its triangle. This is
    /// what per-vertex normal generation gives on unindexed geometry.
    pub fn flat_normals(&self) -> Vec<Vec3> {
        let mut normals = Vec::with_capacity(self.positions.len());
        for [a, b, c] in self.triangles() {
            let n = triangle_normal(a, b, c);
            normals.extend_from_slice(&[n, n, n]);
        }
        normals
    }

    /// Axis-aligned bounds, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_rejects_partial_triangle() {
        assert!(MeshGeometry::from_flat(&[0.0; 9]).is_ok());
        assert_eq!(
            MeshGeometry::from_flat(&[0.0; 6]),
            Err(SketchError::IncompleteTriangles(6))
        );
        assert!(MeshGeometry::from_positions(vec![Vec3::ZERO; 4]).is_err());
    }

    #[test]
    fn test_flat_normals_face_up() {
        let mut mesh = MeshGeometry::new();
        mesh.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
        let normals = mesh.flat_normals();
        assert_eq!(normals.len(), 3);
        for n in normals {
            assert!((n - Vec3::Z).length() < 1e-6, "expected +z normal, got {:?}", n);
        }
    }

    #[test]
    fn test_flat_view_interleaves() {
        let mut mesh = MeshGeometry::new();
        mesh.push_triangle(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ZERO);
        assert_eq!(&mesh.as_flat()[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(mesh.as_flat().len(), 9);
    }

    #[test]
    fn test_bounds() {
        let mut mesh = MeshGeometry::new();
        assert!(mesh.bounds().is_none());
        mesh.push_triangle(Vec3::new(-1.0, 0.0, 2.0), Vec3::X, Vec3::Y);
        let (lo, hi) = mesh.bounds().expect("non-empty");
        assert_eq!(lo, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(hi, Vec3::new(1.0, 1.0, 2.0));
    }
}
