//! Anatomical surface directions.

use nalgebra::Vector3;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the five anatomical tooth faces.
///
/// Each face is bound to a canonical unit vector in the jaw's
/// conventional frame (see the crate docs for the axis convention).
/// The surface locator scores mesh vertices against this vector.
///
/// # Example
///
/// ```
/// use chart_types::SurfaceDirection;
///
/// let d = SurfaceDirection::Occlusal.unit_vector();
/// assert_eq!((d.x, d.y, d.z), (0.0, 0.0, 1.0));
///
/// let parsed: SurfaceDirection = "Buccal".parse().unwrap();
/// assert_eq!(parsed, SurfaceDirection::Buccal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceDirection {
    /// The biting surface (top).
    Occlusal,
    /// The cheek-facing side (outward).
    Buccal,
    /// The tongue-facing side (inward).
    Lingual,
    /// The side toward the front of the arch.
    Mesial,
    /// The side toward the back of the arch.
    Distal,
}

impl SurfaceDirection {
    /// All five surface directions, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Occlusal,
        Self::Buccal,
        Self::Lingual,
        Self::Mesial,
        Self::Distal,
    ];

    /// The canonical unit vector for this surface.
    #[must_use]
    pub fn unit_vector(self) -> Vector3<f64> {
        match self {
            Self::Occlusal => Vector3::new(0.0, 0.0, 1.0),
            Self::Buccal => Vector3::new(1.0, 0.0, 0.0),
            Self::Lingual => Vector3::new(-1.0, 0.0, 0.0),
            Self::Mesial => Vector3::new(0.0, 1.0, 0.0),
            Self::Distal => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    /// The lowercase anatomical name of this surface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Occlusal => "occlusal",
            Self::Buccal => "buccal",
            Self::Lingual => "lingual",
            Self::Mesial => "mesial",
            Self::Distal => "distal",
        }
    }
}

impl fmt::Display for SurfaceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized surface name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSurfaceDirectionError(String);

impl fmt::Display for ParseSurfaceDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown surface direction '{}'", self.0)
    }
}

impl std::error::Error for ParseSurfaceDirectionError {}

impl FromStr for SurfaceDirection {
    type Err = ParseSurfaceDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSurfaceDirectionError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_are_unit_length() {
        for direction in SurfaceDirection::ALL {
            let v = direction.unit_vector();
            assert!((v.norm() - 1.0).abs() < f64::EPSILON, "{direction}");
        }
    }

    #[test]
    fn buccal_and_lingual_oppose() {
        let b = SurfaceDirection::Buccal.unit_vector();
        let l = SurfaceDirection::Lingual.unit_vector();
        assert!((b.dot(&l) - (-1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "OCCLUSAL".parse::<SurfaceDirection>(),
            Ok(SurfaceDirection::Occlusal)
        );
        assert_eq!(
            " distal ".parse::<SurfaceDirection>(),
            Ok(SurfaceDirection::Distal)
        );
        assert!("top".parse::<SurfaceDirection>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for direction in SurfaceDirection::ALL {
            let parsed: SurfaceDirection = direction
                .to_string()
                .parse()
                .unwrap_or(SurfaceDirection::Occlusal);
            assert_eq!(parsed, direction);
        }
    }
}
