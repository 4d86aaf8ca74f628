//! Error types for overlay operations.

use thiserror::Error;

/// Result type for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors that can occur while mutating a chart.
///
/// Not-found conditions in bulk paths are skips, not errors; only a
/// direct single-entity request against an unavailable mesh reports
/// failure to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OverlayError {
    /// The mesh source has no geometry for this identifier, so no
    /// surface anchor can be computed.
    #[error("mesh '{mesh_id}' is not available from the mesh source")]
    MeshUnavailable {
        /// The requested mesh identifier.
        mesh_id: String,
    },
}
