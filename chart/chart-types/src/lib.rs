//! Core types for the DentaForge annotation engine.
//!
//! This crate provides the foundational value types shared by the
//! annotation crates:
//!
//! - [`MeshGeometry`] - Vertex position and normal buffers for one mesh object
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Transform3D`] - World transform of a mesh object
//! - [`SurfaceDirection`] - Anatomical tooth faces with canonical vectors
//! - [`SurfacePoint`] - A located point-and-normal on a mesh surface
//! - [`Severity`] - Cavity severity grades from external scan data
//! - [`MeshSource`] - Collaborator trait for resolving mesh identifiers
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. The engine
//! never loads model files itself; geometry arrives through the
//! [`MeshSource`] seam as plain buffers plus a world transform.
//!
//! # Coordinate System
//!
//! Right-handed, with the jaw model in its conventional pose:
//! - X: buccal/lingual (cheek side positive)
//! - Y: mesial/distal (toward the front of the arch positive)
//! - Z: occlusal (biting surface up)
//!
//! All coordinates are `f64`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod direction;
mod geometry;
mod point;
mod severity;
mod traits;
mod transform;

pub use bounds::Aabb;
pub use direction::{ParseSurfaceDirectionError, SurfaceDirection};
pub use geometry::MeshGeometry;
pub use point::SurfacePoint;
pub use severity::Severity;
pub use traits::{MeshHandle, MeshSource, MeshTable};
pub use transform::Transform3D;

// Re-export for convenience
pub use nalgebra::{Point3, Vector3};
