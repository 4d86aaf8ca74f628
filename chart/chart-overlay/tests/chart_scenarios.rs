//! End-to-end chart scenarios across the registry, locator and overlay.

use approx::assert_relative_eq;
use chart_overlay::{BatchConfig, Chart, ScanCavity};
use chart_types::{MeshGeometry, MeshTable, Severity, SurfaceDirection, Transform3D};

fn jaw_source(mesh_ids: &[&str]) -> MeshTable {
    let mut table = MeshTable::new();
    for mesh_id in mesh_ids {
        table.insert(
            *mesh_id,
            MeshGeometry::from_raw(
                &[
                    -0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.5, 0.5, 0.0, -0.5, 0.5, 0.0, 0.0, 0.0, 1.0,
                ],
                &[
                    -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
                ],
            ),
            Transform3D::identity(),
        );
    }
    table
}

#[test]
fn three_cavities_then_removal_then_restore() {
    let source = jaw_source(&["jaw.005"]);
    let mut chart = Chart::new();

    let mut sizes = Vec::new();
    for _ in 0..3 {
        let size = chart
            .place_cavity(&source, "jaw.005", SurfaceDirection::Occlusal)
            .map(|m| m.size)
            .unwrap_or(f64::NAN);
        sizes.push(size);
    }
    assert_relative_eq!(sizes[0], 0.035, epsilon = 1e-12);
    assert_relative_eq!(sizes[1], 0.050, epsilon = 1e-12);
    assert_relative_eq!(sizes[2], 0.065, epsilon = 1e-12);

    assert_eq!(chart.mark_tooth_removed("jaw.005"), 3);
    assert!(chart.cavities().is_empty());

    // Restore brings back mesh visibility only, never deleted markers.
    assert!(chart.restore_tooth("jaw.005"));
    assert!(!chart.is_tooth_removed("jaw.005"));
    assert!(chart.cavities().is_empty());
}

#[test]
fn notes_survive_removal_and_anchor_to_the_occlusal_surface() {
    let source = jaw_source(&["jaw.002", "jaw.013"]);
    let mut chart = Chart::new();

    chart.add_note(Some("jaw.002"), "deep groove staining", true, "op-7");
    chart.add_note(Some("jaw.013"), "crown candidate", false, "op-7");
    chart.add_note(None, "schedule full scan", true, "op-7");

    assert_eq!(chart.resolve_pending_note_positions(&source), 2);
    for note in chart.notes().iter().filter(|n| !n.is_general()) {
        let anchor = note.anchor.unwrap_or_else(|| panic!("note {} unresolved", note.id));
        // The fixture's apex vertex carries the only occlusal normal.
        assert_relative_eq!(anchor.position.z, 1.0, epsilon = 1e-12);
    }

    let removed = chart.mark_tooth_removed("jaw.002");
    assert_eq!(removed, 0);
    assert_eq!(chart.notes().len(), 3);
}

#[test]
fn scan_import_lands_on_registry_meshes() {
    // Universal 3 -> jaw.002, universal 14 -> jaw.013.
    let source = jaw_source(&["jaw.002", "jaw.013"]);
    let mut chart = Chart::new();

    let rows = [
        ScanCavity {
            tooth_number: 3,
            severity: Severity::Mild,
            direction: SurfaceDirection::Buccal,
        },
        ScanCavity {
            tooth_number: 14,
            severity: Severity::Severe,
            direction: SurfaceDirection::Occlusal,
        },
    ];
    let placed = chart.place_cavity_batch(&source, &rows, &BatchConfig::new().with_seed(1));
    assert_eq!(placed, 2);

    let on_002: Vec<_> = chart.cavities_for_tooth("jaw.002").collect();
    assert_eq!(on_002.len(), 1);
    assert_eq!(on_002[0].severity, Some(Severity::Mild));

    // Imported sizes do not disturb the manual stacking count:
    // the next manual marker on the same pair stacks on top.
    let manual = chart
        .place_cavity(&source, "jaw.002", SurfaceDirection::Buccal)
        .map(|m| m.size)
        .unwrap_or(f64::NAN);
    assert_relative_eq!(manual, 0.035 + 0.015, epsilon = 1e-12);
}

#[test]
fn ids_stay_unique_across_removals() {
    let source = jaw_source(&["jaw.005"]);
    let mut chart = Chart::new();

    let first = chart
        .place_cavity(&source, "jaw.005", SurfaceDirection::Occlusal)
        .map(|m| m.id)
        .unwrap_or(u64::MAX);
    chart.remove_cavity(first);
    let second = chart
        .place_cavity(&source, "jaw.005", SurfaceDirection::Occlusal)
        .map(|m| m.id)
        .unwrap_or(u64::MAX);
    assert_ne!(first, second);
}
