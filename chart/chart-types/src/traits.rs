//! Collaborator seams for mesh lookup.

use crate::{MeshGeometry, Transform3D};
use hashbrown::HashMap;

/// Borrowed geometry plus world transform for one mesh object.
#[derive(Debug, Clone, Copy)]
pub struct MeshHandle<'a> {
    /// The mesh's local-space vertex buffers.
    pub geometry: &'a MeshGeometry,
    /// The mesh's current world transform.
    pub transform: Transform3D,
}

/// Source of mesh geometry, keyed by opaque mesh identifier.
///
/// This is the seam between the annotation engine and whatever scene
/// or asset system actually owns the jaw model. The engine never loads
/// or parses a model file; it only asks for buffers by identifier.
///
/// Implementations return `None` for identifiers they do not carry
/// (a not-found, never an error), which callers resolve into safe
/// defaults or skips.
pub trait MeshSource {
    /// Look up a mesh by its opaque identifier.
    fn mesh(&self, mesh_id: &str) -> Option<MeshHandle<'_>>;
}

/// A simple owned [`MeshSource`] backed by a hash map.
///
/// Hosts that already snapshot their scene into plain buffers can use
/// this directly; it is also the fixture type for tests.
///
/// # Example
///
/// ```
/// use chart_types::{MeshGeometry, MeshSource, MeshTable, Transform3D};
///
/// let mut table = MeshTable::new();
/// table.insert(
///     "jaw.001",
///     MeshGeometry::from_raw(&[0.0, 0.0, 0.0], &[]),
///     Transform3D::identity(),
/// );
///
/// assert!(table.mesh("jaw.001").is_some());
/// assert!(table.mesh("jaw.999").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshTable {
    entries: HashMap<String, (MeshGeometry, Transform3D)>,
}

impl MeshTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace a mesh entry.
    pub fn insert(
        &mut self,
        mesh_id: impl Into<String>,
        geometry: MeshGeometry,
        transform: Transform3D,
    ) {
        self.entries.insert(mesh_id.into(), (geometry, transform));
    }

    /// Update the world transform of an existing entry.
    ///
    /// Returns `false` if the identifier is not present.
    pub fn set_transform(&mut self, mesh_id: &str, transform: Transform3D) -> bool {
        match self.entries.get_mut(mesh_id) {
            Some(entry) => {
                entry.1 = transform;
                true
            }
            None => false,
        }
    }

    /// Remove an entry, returning whether it was present.
    pub fn remove(&mut self, mesh_id: &str) -> bool {
        self.entries.remove(mesh_id).is_some()
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MeshSource for MeshTable {
    fn mesh(&self, mesh_id: &str) -> Option<MeshHandle<'_>> {
        self.entries.get(mesh_id).map(|(geometry, transform)| MeshHandle {
            geometry,
            transform: *transform,
        })
    }
}
