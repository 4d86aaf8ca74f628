//! Overlay entity model for the DentaForge annotation engine.
//!
//! A [`Chart`] is the session-scoped aggregate owning every overlay
//! entity for one jaw model instance: cavity markers, free-text
//! annotations, and the set of teeth currently marked removed. All
//! stacking-size, lazy-resolution and cascade-delete rules live here.
//!
//! The aggregate is explicit, not ambient: hosts construct one chart
//! per session and pass it by reference, so independent charts (for
//! example test fixtures) never cross-contaminate. Operations are
//! synchronous and order-sensitive; a concurrent host must serialize
//! access to a given chart (single writer).
//!
//! # Example
//!
//! ```
//! use chart_overlay::Chart;
//! use chart_types::{MeshGeometry, MeshTable, SurfaceDirection, Transform3D};
//!
//! let mut meshes = MeshTable::new();
//! meshes.insert(
//!     "jaw.005",
//!     MeshGeometry::from_raw(&[0.0, 0.0, 0.0, 0.0, 0.0, 1.0], &[]),
//!     Transform3D::identity(),
//! );
//!
//! let mut chart = Chart::new();
//! let marker = chart
//!     .place_cavity(&meshes, "jaw.005", SurfaceDirection::Occlusal)
//!     .unwrap();
//! assert!((marker.size - 0.035).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cavity;
mod chart;
mod error;
mod note;

pub use cavity::{
    BatchConfig, CavityMarker, ScanCavity, BASE_SIZE, RENDER_SIZE_CEILING, SIZE_INCREMENT,
};
pub use chart::Chart;
pub use error::{OverlayError, OverlayResult};
pub use note::Annotation;
