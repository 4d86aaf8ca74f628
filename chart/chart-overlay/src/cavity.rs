//! Cavity markers and bulk-import rows.

use chart_types::{Point3, Severity, SurfaceDirection, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of the first cavity marker at a (tooth, surface) pair.
pub const BASE_SIZE: f64 = 0.035;

/// Size added for each marker already present at the same pair.
///
/// Stacking models worsening documented damage, so stored sizes grow
/// without bound; renderers clamp via [`CavityMarker::render_size`].
pub const SIZE_INCREMENT: f64 = 0.015;

/// Ceiling applied to the rendered (not stored) marker size.
pub const RENDER_SIZE_CEILING: f64 = 0.12;

/// A cavity marker anchored to a tooth surface.
///
/// Created on user placement or bulk import from scan data, destroyed
/// individually or by the tooth-removal cascade. The anchor position
/// and normal are view-local values from the surface locator; the
/// persistence collaborator receives the marker without them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CavityMarker {
    /// Unique marker id within the owning chart.
    pub id: u64,
    /// Mesh identifier of the tooth this marker sits on.
    pub tooth_mesh_id: String,
    /// Which anatomical surface the marker occupies.
    pub direction: SurfaceDirection,
    /// World-space anchor position on the tooth surface.
    pub position: Point3<f64>,
    /// World-space outward normal at the anchor.
    pub normal: Vector3<f64>,
    /// Stored marker size (unbounded, see [`SIZE_INCREMENT`]).
    pub size: f64,
    /// Severity grade, present only for scan-imported markers.
    pub severity: Option<Severity>,
}

impl CavityMarker {
    /// The size a renderer should draw, clamped to a safe ceiling.
    ///
    /// The stored [`size`](Self::size) is the record; only the drawn
    /// value saturates.
    #[must_use]
    pub fn render_size(&self) -> f64 {
        self.size.min(RENDER_SIZE_CEILING)
    }
}

/// One row of externally supplied scan data for bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanCavity {
    /// Universal tooth number (1-32) as reported by the scan.
    pub tooth_number: u8,
    /// Reported severity grade.
    pub severity: Severity,
    /// Which surface the cavity was found on.
    pub direction: SurfaceDirection,
}

/// Configuration for bulk cavity import.
///
/// Imported marker sizes carry a small random jitter inside the
/// severity's size range so identical grades do not render as
/// identical spheres. Seed the jitter for reproducible imports.
///
/// # Example
///
/// ```
/// use chart_overlay::BatchConfig;
///
/// let config = BatchConfig::new().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Optional seed for reproducible size jitter.
    pub seed: Option<u64>,
}

impl BatchConfig {
    /// Create a configuration with unseeded jitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a jitter seed for reproducible imports.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
