//! Forward and reverse lookup over the descriptor table.

use hashbrown::HashMap;
use std::sync::OnceLock;

use crate::descriptor::{MeshIdentity, Quadrant, ToothDescriptor};
use crate::table::{GUM_MESH_IDS, TOOTH_TABLE};

fn mesh_index() -> &'static HashMap<&'static str, &'static ToothDescriptor> {
    static INDEX: OnceLock<HashMap<&'static str, &'static ToothDescriptor>> = OnceLock::new();
    INDEX.get_or_init(|| TOOTH_TABLE.iter().map(|t| (t.mesh_id, t)).collect())
}

fn number_index() -> &'static HashMap<u8, &'static ToothDescriptor> {
    static INDEX: OnceLock<HashMap<u8, &'static ToothDescriptor>> = OnceLock::new();
    INDEX.get_or_init(|| TOOTH_TABLE.iter().map(|t| (t.universal_number, t)).collect())
}

/// Describe what a mesh identifier refers to.
///
/// Unknown identifiers are not an error; the returned
/// [`MeshIdentity::Unknown`] keeps the raw identifier as the fallback
/// display label.
///
/// # Example
///
/// ```
/// use tooth_registry::{describe, MeshIdentity};
///
/// assert!(matches!(describe("jaw.001"), MeshIdentity::Tooth(_)));
/// assert!(matches!(describe("gums.upper"), MeshIdentity::Gum(_)));
/// assert!(matches!(describe("debris.003"), MeshIdentity::Unknown(_)));
/// ```
#[must_use]
pub fn describe(mesh_id: &str) -> MeshIdentity<'_> {
    if let Some(tooth) = mesh_index().get(mesh_id) {
        return MeshIdentity::Tooth(tooth);
    }
    if let Some(gum) = GUM_MESH_IDS.iter().find(|&&g| g == mesh_id) {
        return MeshIdentity::Gum(gum);
    }
    MeshIdentity::Unknown(mesh_id)
}

/// Resolve a display name and quadrant to a mesh identifier.
///
/// The name match is exact but case-insensitive, which is what the
/// natural-language command collaborator needs ("first molar" vs
/// "First Molar").
///
/// # Example
///
/// ```
/// use tooth_registry::{resolve, Quadrant};
///
/// assert_eq!(resolve("first molar", Quadrant::UpperLeft), Some("jaw.013"));
/// assert_eq!(resolve("wisdom tooth", Quadrant::UpperLeft), None);
/// ```
#[must_use]
pub fn resolve(display_name: &str, quadrant: Quadrant) -> Option<&'static str> {
    let name = display_name.trim();
    TOOTH_TABLE
        .iter()
        .find(|t| t.quadrant == quadrant && t.display_name.eq_ignore_ascii_case(name))
        .map(|t| t.mesh_id)
}

/// Resolve a universal tooth number to a mesh identifier.
///
/// Used when applying scan-derived data expressed in universal
/// numbering. Numbers outside the model (including the third molars
/// 1, 16, 17 and 32) resolve to `None`.
///
/// # Example
///
/// ```
/// use tooth_registry::resolve_by_number;
///
/// assert_eq!(resolve_by_number(3), Some("jaw.002"));
/// assert_eq!(resolve_by_number(17), None);
/// ```
#[must_use]
pub fn resolve_by_number(universal_number: u8) -> Option<&'static str> {
    number_index().get(&universal_number).map(|t| t.mesh_id)
}
