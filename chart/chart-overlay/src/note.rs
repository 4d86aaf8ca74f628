//! Free-text annotations.

use chart_types::SurfacePoint;
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tooth number reserved for general (tooth-less) notes.
pub(crate) const GENERAL_NOTE_NUMBER: u8 = 0;

/// A free-text note, optionally tied to a tooth.
///
/// Notes are historical record: unlike cavity markers they survive
/// tooth removal. The surface anchor is resolved lazily, exactly once,
/// the first time the owning tooth's mesh becomes available; general
/// notes (no tooth) never resolve an anchor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    /// Unique note id within the owning chart.
    pub id: u64,
    /// Mesh identifier of the tooth, or `None` for a general note.
    pub tooth_mesh_id: Option<String>,
    /// Universal tooth number; 0 means general.
    pub tooth_number: u8,
    /// Lazily resolved surface anchor. Position and normal are always
    /// both absent or both present.
    pub anchor: Option<SurfacePoint>,
    /// The note text.
    pub text: String,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Identifier of the authoring operator.
    pub author_id: String,
    /// Whether the note is visible to other operators.
    pub is_public: bool,
}

impl Annotation {
    /// Whether this note is a general note, not tied to a tooth.
    #[must_use]
    pub const fn is_general(&self) -> bool {
        self.tooth_mesh_id.is_none()
    }

    /// Whether the surface anchor has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.anchor.is_some()
    }
}
