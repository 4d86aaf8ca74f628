//! Located surface points.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A concrete point on a mesh surface with its outward normal.
///
/// Produced by the surface locator and owned by whichever overlay
/// entity requested it. Never persisted: the anchor is view-local and
/// recomputed when the underlying mesh transform changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfacePoint {
    /// World-space position on (or near) the mesh surface.
    pub position: Point3<f64>,

    /// World-space outward unit normal at the position.
    pub normal: Vector3<f64>,
}

impl SurfacePoint {
    /// Create a surface point from position and normal.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }
}
