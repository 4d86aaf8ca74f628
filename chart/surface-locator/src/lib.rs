//! Surface point location for the DentaForge annotation engine.
//!
//! Given a mesh's vertex buffers, its world transform, and an abstract
//! directional intent ("occlusal", "buccal", ...), [`locate`] finds a
//! concrete point-and-normal on the mesh's actual geometry. Overlay
//! entities anchor themselves through this single function.
//!
//! The locator is a pure function of its inputs: no randomness, no
//! internal caching, bit-identical results for identical inputs.
//! Callers that want caching can memoize on (geometry, transform,
//! direction) themselves.
//!
//! # Algorithm
//!
//! 1. Compute the mesh's world-space bounding box; take its center.
//! 2. Sample evenly strided vertices, at most
//!    [`LocatorConfig::sample_budget`] of them.
//! 3. Score each sample by how far it sits from the center along the
//!    requested direction, blended with how well its normal agrees
//!    with that direction.
//! 4. The best-scoring sample's world position and normal win.
//!
//! Pure center-to-vertex direction is a poor proxy for "being on that
//! face" near concavities, so normal agreement is blended in as a
//! secondary signal. The 0.7/0.3 split is a tuning constant carried
//! from field calibration, not a derived value.
//!
//! # Example
//!
//! ```
//! use chart_types::{MeshGeometry, SurfaceDirection, Transform3D};
//! use surface_locator::locate;
//!
//! let geometry = MeshGeometry::from_raw(
//!     &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
//!     &[0.0, 0.0, -1.0, 0.0, 0.0, 1.0],
//! );
//! let point = locate(
//!     &geometry,
//!     &Transform3D::identity(),
//!     SurfaceDirection::Occlusal,
//! );
//! assert_eq!(point.position.z, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod locate;

pub use config::LocatorConfig;
pub use locate::{locate, locate_with};
