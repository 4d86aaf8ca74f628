//! Label declutter layout for note callouts.

use chart_overlay::Annotation;
use hashbrown::HashMap;
use nalgebra::Vector3;

/// Offset every callout starts from.
const MIN_VERTICAL_OFFSET: f64 = 0.15;

/// Anchor distance under which two callouts are considered clustered.
const OVERLAP_RADIUS: f64 = 0.5;

/// Extra lift per clustered neighbor.
const VERTICAL_STEP: f64 = 0.4;

/// Sideways shift per clustered neighbor, sign alternating.
const HORIZONTAL_STEP: f64 = 0.2;

/// Compute callout offsets for a set of notes.
///
/// Each resolved note receives an offset vector (x sideways, z up,
/// applied to its surface anchor) so that clustered callouts stack
/// vertically with alternating horizontal shifts instead of drawing
/// on top of each other. Anchors only cluster locally (adjacent
/// teeth), so a simple stack beats a general force-directed layout.
///
/// Notes without a resolved anchor are excluded from the result.
/// Iteration is ordered by note id, so the layout is deterministic
/// and stable across re-renders.
///
/// # Example
///
/// ```
/// use chart_overlay::Chart;
/// use chart_visual::layout_labels;
///
/// let chart = Chart::new();
/// let offsets = layout_labels(chart.notes());
/// assert!(offsets.is_empty());
/// ```
#[must_use]
pub fn layout_labels(notes: &[Annotation]) -> HashMap<u64, Vector3<f64>> {
    let mut resolved: Vec<&Annotation> = notes.iter().filter(|n| n.is_resolved()).collect();
    resolved.sort_by_key(|n| n.id);

    let mut offsets = HashMap::with_capacity(resolved.len());
    for (index, note) in resolved.iter().enumerate() {
        let Some(anchor) = note.anchor else { continue };

        let mut offset = Vector3::new(0.0, 0.0, MIN_VERTICAL_OFFSET);
        let mut overlaps = 0usize;
        for earlier in &resolved[..index] {
            let Some(other_anchor) = earlier.anchor else { continue };
            let distance = (anchor.position - other_anchor.position).norm();
            if distance < OVERLAP_RADIUS {
                overlaps += 1;
                offset.z += VERTICAL_STEP;
                // Alternate left/right by the running overlap count.
                let sign = if overlaps % 2 == 1 { 1.0 } else { -1.0 };
                offset.x += sign * HORIZONTAL_STEP;
            }
        }

        offsets.insert(note.id, offset);
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chart_types::{Point3, SurfacePoint};
    use std::time::SystemTime;

    fn note_at(id: u64, x: f64) -> Annotation {
        Annotation {
            id,
            tooth_mesh_id: Some(format!("jaw.{id:03}")),
            tooth_number: 2,
            anchor: Some(SurfacePoint::new(
                Point3::new(x, 0.0, 0.0),
                nalgebra::Vector3::z(),
            )),
            text: String::new(),
            created_at: SystemTime::now(),
            author_id: "op-1".to_owned(),
            is_public: true,
        }
    }

    fn unresolved_note(id: u64) -> Annotation {
        Annotation {
            anchor: None,
            ..note_at(id, 0.0)
        }
    }

    #[test]
    fn isolated_note_gets_minimum_offset() {
        let notes = [note_at(1, 0.0), note_at(2, 10.0)];
        let offsets = layout_labels(&notes);

        let a = offsets.get(&1).copied().unwrap_or_default();
        assert_relative_eq!(a.z, MIN_VERTICAL_OFFSET, epsilon = 1e-12);
        assert_relative_eq!(a.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn clustered_notes_stack_upward_with_alternating_shift() {
        let notes = [note_at(1, 0.0), note_at(2, 0.1), note_at(3, 0.2)];
        let offsets = layout_labels(&notes);

        let first = offsets.get(&1).copied().unwrap_or_default();
        let second = offsets.get(&2).copied().unwrap_or_default();
        let third = offsets.get(&3).copied().unwrap_or_default();

        assert_relative_eq!(first.z, 0.15, epsilon = 1e-12);

        // One earlier neighbor: +0.4 up, +0.2 right.
        assert_relative_eq!(second.z, 0.55, epsilon = 1e-12);
        assert_relative_eq!(second.x, 0.2, epsilon = 1e-12);

        // Two earlier neighbors: +0.8 up, shifts cancel (+0.2 - 0.2).
        assert_relative_eq!(third.z, 0.95, epsilon = 1e-12);
        assert_relative_eq!(third.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn unresolved_notes_are_excluded() {
        let notes = [note_at(1, 0.0), unresolved_note(2)];
        let offsets = layout_labels(&notes);
        assert_eq!(offsets.len(), 1);
        assert!(offsets.contains_key(&1));
    }

    #[test]
    fn layout_is_stable_across_input_order() {
        let forward = [note_at(1, 0.0), note_at(2, 0.1), note_at(3, 0.2)];
        let backward = [note_at(3, 0.2), note_at(2, 0.1), note_at(1, 0.0)];

        let a = layout_labels(&forward);
        let b = layout_labels(&backward);
        assert_eq!(a, b);
    }
}
