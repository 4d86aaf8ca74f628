//! The session-scoped chart aggregate.

// Marker counts are tiny; the f64 cast is exact far beyond any
// realistic chart size.
#![allow(clippy::cast_precision_loss)]

use hashbrown::HashSet;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info, warn};

use chart_types::{MeshSource, SurfaceDirection};
use surface_locator::locate;
use tooth_registry::{describe, resolve_by_number, MeshIdentity};

use crate::cavity::{BatchConfig, CavityMarker, ScanCavity, BASE_SIZE, SIZE_INCREMENT};
use crate::error::{OverlayError, OverlayResult};
use crate::note::{Annotation, GENERAL_NOTE_NUMBER};

/// Default anchor surface for lazily resolved notes.
const NOTE_ANCHOR_DIRECTION: SurfaceDirection = SurfaceDirection::Occlusal;

/// All overlay entities for one jaw model instance.
///
/// Owns the cavity markers, annotations and deleted-teeth set of one
/// session. See the crate docs for the ownership and concurrency
/// contract.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    cavities: Vec<CavityMarker>,
    notes: Vec<Annotation>,
    deleted_teeth: HashSet<String>,
    next_cavity_id: u64,
    next_note_id: u64,
}

impl Chart {
    /// Create an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a cavity marker on a tooth surface.
    ///
    /// The marker's size grows with the number of markers already
    /// recorded at the same (tooth, surface) pair, modeling visual
    /// crowding of worsening documented damage.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::MeshUnavailable`] if the mesh source
    /// has no geometry for `tooth_mesh_id`.
    pub fn place_cavity(
        &mut self,
        source: &impl MeshSource,
        tooth_mesh_id: &str,
        direction: SurfaceDirection,
    ) -> OverlayResult<&CavityMarker> {
        let handle = source
            .mesh(tooth_mesh_id)
            .ok_or_else(|| OverlayError::MeshUnavailable {
                mesh_id: tooth_mesh_id.to_owned(),
            })?;

        let existing = self.cavity_count_at(tooth_mesh_id, direction);
        let size = (existing as f64).mul_add(SIZE_INCREMENT, BASE_SIZE);
        let point = locate(handle.geometry, &handle.transform, direction);

        let id = self.next_cavity_id;
        self.next_cavity_id += 1;

        info!(
            id,
            tooth = tooth_mesh_id,
            surface = %direction,
            stacked_on = existing,
            size,
            "placed cavity marker"
        );

        self.cavities.push(CavityMarker {
            id,
            tooth_mesh_id: tooth_mesh_id.to_owned(),
            direction,
            position: point.position,
            normal: point.normal,
            size,
            severity: None,
        });
        Ok(&self.cavities[self.cavities.len() - 1])
    }

    /// Bulk-import cavities from external scan data.
    ///
    /// Marker sizes are drawn from each row's severity range with a
    /// small jitter (seedable via [`BatchConfig`]). Rows whose tooth
    /// number does not resolve, or whose mesh is unavailable, are
    /// skipped with a warning, never fatal.
    ///
    /// Returns the number of markers actually placed.
    pub fn place_cavity_batch(
        &mut self,
        source: &impl MeshSource,
        rows: &[ScanCavity],
        config: &BatchConfig,
    ) -> usize {
        let mut rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        };

        let mut placed = 0;
        for row in rows {
            let Some(mesh_id) = resolve_by_number(row.tooth_number) else {
                warn!(number = row.tooth_number, "scan row has no matching tooth, skipping");
                continue;
            };
            let Some(handle) = source.mesh(mesh_id) else {
                warn!(mesh = mesh_id, "tooth mesh unavailable, skipping scan row");
                continue;
            };

            let (lo, hi) = row.severity.size_range();
            let size = rng.gen_range(lo..hi);
            let point = locate(handle.geometry, &handle.transform, row.direction);

            let id = self.next_cavity_id;
            self.next_cavity_id += 1;

            self.cavities.push(CavityMarker {
                id,
                tooth_mesh_id: mesh_id.to_owned(),
                direction: row.direction,
                position: point.position,
                normal: point.normal,
                size,
                severity: Some(row.severity),
            });
            placed += 1;
        }

        info!(placed, requested = rows.len(), "imported scan cavities");
        placed
    }

    /// Remove a single cavity marker by id.
    ///
    /// Returns whether a marker was removed.
    pub fn remove_cavity(&mut self, id: u64) -> bool {
        match self.cavities.iter().position(|c| c.id == id) {
            Some(index) => {
                self.cavities.remove(index);
                debug!(id, "removed cavity marker");
                true
            }
            None => false,
        }
    }

    /// Remove every cavity marker on a tooth.
    ///
    /// Used by the tooth-removal cascade. Returns the number removed.
    pub fn remove_cavities_for_tooth(&mut self, tooth_mesh_id: &str) -> usize {
        let before = self.cavities.len();
        self.cavities.retain(|c| c.tooth_mesh_id != tooth_mesh_id);
        let removed = before - self.cavities.len();
        if removed > 0 {
            debug!(tooth = tooth_mesh_id, removed, "removed cavity markers for tooth");
        }
        removed
    }

    /// Add a note, optionally tied to a tooth.
    ///
    /// `tooth_mesh_id = None` produces a general note (tooth number 0).
    /// The surface anchor is left unresolved; call
    /// [`resolve_pending_note_positions`](Self::resolve_pending_note_positions)
    /// once the mesh is available.
    pub fn add_note(
        &mut self,
        tooth_mesh_id: Option<&str>,
        text: impl Into<String>,
        is_public: bool,
        author_id: impl Into<String>,
    ) -> &Annotation {
        let tooth_number = match tooth_mesh_id {
            None => GENERAL_NOTE_NUMBER,
            Some(mesh_id) => match describe(mesh_id) {
                MeshIdentity::Tooth(tooth) => tooth.universal_number,
                MeshIdentity::Gum(_) => GENERAL_NOTE_NUMBER,
                MeshIdentity::Unknown(raw) => {
                    warn!(mesh = raw, "note references unknown mesh");
                    GENERAL_NOTE_NUMBER
                }
            },
        };

        let id = self.next_note_id;
        self.next_note_id += 1;

        info!(id, tooth = ?tooth_mesh_id, tooth_number, "added note");

        self.notes.push(Annotation {
            id,
            tooth_mesh_id: tooth_mesh_id.map(str::to_owned),
            tooth_number,
            anchor: None,
            text: text.into(),
            created_at: std::time::SystemTime::now(),
            author_id: author_id.into(),
            is_public,
        });
        &self.notes[self.notes.len() - 1]
    }

    /// Remove a note by id (author action).
    ///
    /// Returns whether a note was removed.
    pub fn remove_note(&mut self, id: u64) -> bool {
        match self.notes.iter().position(|n| n.id == id) {
            Some(index) => {
                self.notes.remove(index);
                debug!(id, "removed note");
                true
            }
            None => false,
        }
    }

    /// Resolve surface anchors for notes whose tooth mesh is now
    /// available.
    ///
    /// Each note resolves at most once, against the occlusal surface;
    /// calling this again is a no-op for already-resolved notes, so
    /// hosts may safely invoke it every frame until all meshes have
    /// loaded. Returns the number of notes resolved by this call.
    pub fn resolve_pending_note_positions(&mut self, source: &impl MeshSource) -> usize {
        let mut resolved = 0;
        for note in &mut self.notes {
            if note.anchor.is_some() {
                continue;
            }
            let Some(mesh_id) = note.tooth_mesh_id.as_deref() else {
                continue;
            };
            let Some(handle) = source.mesh(mesh_id) else {
                continue;
            };
            note.anchor = Some(locate(
                handle.geometry,
                &handle.transform,
                NOTE_ANCHOR_DIRECTION,
            ));
            resolved += 1;
        }
        if resolved > 0 {
            debug!(resolved, "resolved pending note anchors");
        }
        resolved
    }

    /// Mark a tooth as removed.
    ///
    /// Hides the mesh (host-side) and cascades deletion of its cavity
    /// markers. Notes are historical record and always survive.
    /// Returns the number of cascaded marker deletions.
    pub fn mark_tooth_removed(&mut self, tooth_mesh_id: &str) -> usize {
        let newly_removed = self.deleted_teeth.insert(tooth_mesh_id.to_owned());
        let cascaded = self.remove_cavities_for_tooth(tooth_mesh_id);
        info!(
            tooth = tooth_mesh_id,
            newly_removed, cascaded, "marked tooth removed"
        );
        cascaded
    }

    /// Restore a previously removed tooth.
    ///
    /// Only mesh visibility comes back; cascaded marker deletions are
    /// not resurrected. Returns whether the tooth was in the removed
    /// set.
    pub fn restore_tooth(&mut self, tooth_mesh_id: &str) -> bool {
        let restored = self.deleted_teeth.remove(tooth_mesh_id);
        if restored {
            info!(tooth = tooth_mesh_id, "restored tooth");
        }
        restored
    }

    /// All cavity markers, in placement order.
    #[must_use]
    pub fn cavities(&self) -> &[CavityMarker] {
        &self.cavities
    }

    /// All notes, in creation order.
    #[must_use]
    pub fn notes(&self) -> &[Annotation] {
        &self.notes
    }

    /// Look up a cavity marker by id.
    #[must_use]
    pub fn cavity(&self, id: u64) -> Option<&CavityMarker> {
        self.cavities.iter().find(|c| c.id == id)
    }

    /// Look up a note by id.
    #[must_use]
    pub fn note(&self, id: u64) -> Option<&Annotation> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Iterate the cavity markers on one tooth.
    pub fn cavities_for_tooth<'a>(
        &'a self,
        tooth_mesh_id: &'a str,
    ) -> impl Iterator<Item = &'a CavityMarker> {
        self.cavities
            .iter()
            .filter(move |c| c.tooth_mesh_id == tooth_mesh_id)
    }

    /// Count the markers at one (tooth, surface) pair.
    #[must_use]
    pub fn cavity_count_at(&self, tooth_mesh_id: &str, direction: SurfaceDirection) -> usize {
        self.cavities
            .iter()
            .filter(|c| c.tooth_mesh_id == tooth_mesh_id && c.direction == direction)
            .count()
    }

    /// Whether a tooth is currently marked removed.
    #[must_use]
    pub fn is_tooth_removed(&self, tooth_mesh_id: &str) -> bool {
        self.deleted_teeth.contains(tooth_mesh_id)
    }

    /// Iterate the mesh identifiers currently marked removed.
    pub fn deleted_teeth(&self) -> impl Iterator<Item = &str> {
        self.deleted_teeth.iter().map(String::as_str)
    }
}
