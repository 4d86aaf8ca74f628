//! Vertex buffers for one mesh object.

use crate::Aabb;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex position and normal buffers for a single mesh object.
///
/// This is the shape in which the external mesh source hands geometry
/// to the engine: anonymous per-object buffers, no semantic labels and
/// no face indices (the engine never needs topology, only vertices).
///
/// The normal buffer may be empty or shorter than the position buffer;
/// consumers treat a missing normal as "unknown" and fall back to a
/// direction-derived normal.
///
/// # Example
///
/// ```
/// use chart_types::MeshGeometry;
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let normals = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
///
/// let geometry = MeshGeometry::from_raw(&positions, &normals);
/// assert_eq!(geometry.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshGeometry {
    /// Vertex positions in the mesh's local frame.
    pub positions: Vec<Point3<f64>>,

    /// Per-vertex outward normals, parallel to `positions`.
    /// May be empty or shorter than `positions`.
    pub normals: Vec<Vector3<f64>>,
}

impl MeshGeometry {
    /// Create an empty geometry.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Create a geometry from positions and normals.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, normals: Vec<Vector3<f64>>) -> Self {
        Self { positions, normals }
    }

    /// Create a geometry from flat coordinate buffers.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat position buffer `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `normals` - Flat normal buffer in the same layout; may be empty
    ///
    /// Returns an empty geometry if `positions.len()` is not divisible
    /// by 3. Trailing normal components that do not form a full vector
    /// are dropped.
    #[must_use]
    pub fn from_raw(positions: &[f64], normals: &[f64]) -> Self {
        if positions.len() % 3 != 0 {
            return Self::new();
        }

        let positions = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let normals = normals
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect();

        Self { positions, normals }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Check if the geometry has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get a vertex normal, if the buffer carries one at this index.
    #[inline]
    #[must_use]
    pub fn normal(&self, index: usize) -> Option<Vector3<f64>> {
        self.normals.get(index).copied()
    }

    /// Compute the local-space bounding box.
    ///
    /// Returns an empty AABB for an empty geometry.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_splits_buffers() {
        let positions = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
        let normals = [0.0, 0.0, 1.0];
        let g = MeshGeometry::from_raw(&positions, &normals);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.normal(0), Some(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(g.normal(1), None);
    }

    #[test]
    fn from_raw_rejects_ragged_positions() {
        let g = MeshGeometry::from_raw(&[1.0, 2.0], &[]);
        assert!(g.is_empty());
    }

    #[test]
    fn bounds_of_empty_geometry() {
        let g = MeshGeometry::new();
        assert!(g.bounds().is_empty());
    }

    #[test]
    fn bounds_enclose_positions() {
        let g = MeshGeometry::from_raw(&[0.0, 0.0, 0.0, 2.0, -1.0, 4.0], &[]);
        let b = g.bounds();
        assert!((b.min.y - (-1.0)).abs() < f64::EPSILON);
        assert!((b.max.z - 4.0).abs() < f64::EPSILON);
    }
}
