//! The compiled descriptor table.
//!
//! Mesh identifiers follow the exported jaw model's object naming:
//! `jaw.NNN` ordered by universal number (2-15, then 18-31), plus the
//! two gum objects. The table is fixed data; nothing mutates it at
//! runtime.

use crate::descriptor::{Quadrant, ToothDescriptor, ToothRole};

const fn tooth(
    mesh_id: &'static str,
    role: ToothRole,
    quadrant: Quadrant,
    universal_number: u8,
) -> ToothDescriptor {
    ToothDescriptor {
        mesh_id,
        display_name: role.display_name(),
        role,
        quadrant,
        universal_number,
    }
}

/// Mesh identifiers of the gum objects.
pub const GUM_MESH_IDS: [&str; 2] = ["gums.upper", "gums.lower"];

/// Descriptors for all 28 teeth of the model.
///
/// Universal numbering runs 1-32 clockwise from the patient's upper
/// right third molar; the model omits the four third molars, so the
/// table covers 2-15 and 18-31.
pub const TOOTH_TABLE: [ToothDescriptor; 28] = [
    // Upper right, back to front (2-8)
    tooth("jaw.001", ToothRole::SecondMolar, Quadrant::UpperRight, 2),
    tooth("jaw.002", ToothRole::FirstMolar, Quadrant::UpperRight, 3),
    tooth("jaw.003", ToothRole::SecondPremolar, Quadrant::UpperRight, 4),
    tooth("jaw.004", ToothRole::FirstPremolar, Quadrant::UpperRight, 5),
    tooth("jaw.005", ToothRole::Canine, Quadrant::UpperRight, 6),
    tooth("jaw.006", ToothRole::LateralIncisor, Quadrant::UpperRight, 7),
    tooth("jaw.007", ToothRole::CentralIncisor, Quadrant::UpperRight, 8),
    // Upper left, front to back (9-15)
    tooth("jaw.008", ToothRole::CentralIncisor, Quadrant::UpperLeft, 9),
    tooth("jaw.009", ToothRole::LateralIncisor, Quadrant::UpperLeft, 10),
    tooth("jaw.010", ToothRole::Canine, Quadrant::UpperLeft, 11),
    tooth("jaw.011", ToothRole::FirstPremolar, Quadrant::UpperLeft, 12),
    tooth("jaw.012", ToothRole::SecondPremolar, Quadrant::UpperLeft, 13),
    tooth("jaw.013", ToothRole::FirstMolar, Quadrant::UpperLeft, 14),
    tooth("jaw.014", ToothRole::SecondMolar, Quadrant::UpperLeft, 15),
    // Lower left, back to front (18-24)
    tooth("jaw.015", ToothRole::SecondMolar, Quadrant::LowerLeft, 18),
    tooth("jaw.016", ToothRole::FirstMolar, Quadrant::LowerLeft, 19),
    tooth("jaw.017", ToothRole::SecondPremolar, Quadrant::LowerLeft, 20),
    tooth("jaw.018", ToothRole::FirstPremolar, Quadrant::LowerLeft, 21),
    tooth("jaw.019", ToothRole::Canine, Quadrant::LowerLeft, 22),
    tooth("jaw.020", ToothRole::LateralIncisor, Quadrant::LowerLeft, 23),
    tooth("jaw.021", ToothRole::CentralIncisor, Quadrant::LowerLeft, 24),
    // Lower right, front to back (25-31)
    tooth("jaw.022", ToothRole::CentralIncisor, Quadrant::LowerRight, 25),
    tooth("jaw.023", ToothRole::LateralIncisor, Quadrant::LowerRight, 26),
    tooth("jaw.024", ToothRole::Canine, Quadrant::LowerRight, 27),
    tooth("jaw.025", ToothRole::FirstPremolar, Quadrant::LowerRight, 28),
    tooth("jaw.026", ToothRole::SecondPremolar, Quadrant::LowerRight, 29),
    tooth("jaw.027", ToothRole::FirstMolar, Quadrant::LowerRight, 30),
    tooth("jaw.028", ToothRole::SecondMolar, Quadrant::LowerRight, 31),
];

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn mesh_ids_are_unique() {
        let ids: HashSet<&str> = TOOTH_TABLE.iter().map(|t| t.mesh_id).collect();
        assert_eq!(ids.len(), TOOTH_TABLE.len());
    }

    #[test]
    fn universal_numbers_are_unique_and_in_range() {
        let mut numbers = HashSet::new();
        for tooth in &TOOTH_TABLE {
            let n = tooth.universal_number;
            assert!((2..=15).contains(&n) || (18..=31).contains(&n), "{n}");
            assert!(numbers.insert(n), "duplicate universal number {n}");
        }
        assert_eq!(numbers.len(), 28);
    }

    #[test]
    fn each_quadrant_has_seven_teeth() {
        for quadrant in Quadrant::ALL {
            let count = TOOTH_TABLE.iter().filter(|t| t.quadrant == quadrant).count();
            assert_eq!(count, 7, "{quadrant}");
        }
    }

    #[test]
    fn each_quadrant_has_one_of_each_role() {
        for quadrant in Quadrant::ALL {
            let roles: HashSet<ToothRole> = TOOTH_TABLE
                .iter()
                .filter(|t| t.quadrant == quadrant)
                .map(|t| t.role)
                .collect();
            assert_eq!(roles.len(), 7, "{quadrant}");
        }
    }
}
