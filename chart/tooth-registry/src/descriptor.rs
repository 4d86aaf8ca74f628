//! Anatomical tooth descriptors.

use std::fmt;
use std::str::FromStr;

/// One of the four jaw regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Patient's upper right.
    UpperRight,
    /// Patient's upper left.
    UpperLeft,
    /// Patient's lower left.
    LowerLeft,
    /// Patient's lower right.
    LowerRight,
}

impl Quadrant {
    /// All four quadrants, in universal-numbering order.
    pub const ALL: [Self; 4] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// Human-readable quadrant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpperRight => "upper right",
            Self::UpperLeft => "upper left",
            Self::LowerLeft => "lower left",
            Self::LowerRight => "lower right",
        }
    }

    /// Whether this quadrant is in the upper arch.
    #[must_use]
    pub const fn is_upper(self) -> bool {
        matches!(self, Self::UpperRight | Self::UpperLeft)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized quadrant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQuadrantError(String);

impl fmt::Display for ParseQuadrantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quadrant '{}'", self.0)
    }
}

impl std::error::Error for ParseQuadrantError {}

impl FromStr for Quadrant {
    type Err = ParseQuadrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseQuadrantError(s.to_owned()))
    }
}

/// The anatomical role of a tooth within its quadrant.
///
/// Ordered from the midline outward, which also orders chewing load
/// from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToothRole {
    /// Front-center cutting tooth.
    CentralIncisor,
    /// Second cutting tooth from the midline.
    LateralIncisor,
    /// Corner tearing tooth.
    Canine,
    /// First bicuspid.
    FirstPremolar,
    /// Second bicuspid.
    SecondPremolar,
    /// Primary grinding tooth.
    FirstMolar,
    /// Secondary grinding tooth.
    SecondMolar,
}

impl ToothRole {
    /// Human-readable role name, also used as the display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CentralIncisor => "Central Incisor",
            Self::LateralIncisor => "Lateral Incisor",
            Self::Canine => "Canine",
            Self::FirstPremolar => "First Premolar",
            Self::SecondPremolar => "Second Premolar",
            Self::FirstMolar => "First Molar",
            Self::SecondMolar => "Second Molar",
        }
    }
}

impl fmt::Display for ToothRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Immutable descriptor tying a mesh identifier to a tooth.
///
/// Exactly one descriptor exists per tooth mesh identifier; universal
/// numbers are unique across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToothDescriptor {
    /// The opaque mesh object identifier.
    pub mesh_id: &'static str,
    /// Display name, e.g. "First Molar".
    pub display_name: &'static str,
    /// Anatomical role within the quadrant.
    pub role: ToothRole,
    /// The jaw quadrant this tooth sits in.
    pub quadrant: Quadrant,
    /// Universal tooth number (2-15 upper, 18-31 lower).
    pub universal_number: u8,
}

/// What a mesh identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshIdentity<'a> {
    /// A tooth with a full anatomical descriptor.
    Tooth(&'static ToothDescriptor),
    /// A gum mesh (upper or lower).
    Gum(&'static str),
    /// An identifier the registry does not know. Carries the raw
    /// identifier as the only available display label.
    Unknown(&'a str),
}

impl<'a> MeshIdentity<'a> {
    /// A display label usable in UI regardless of variant.
    #[must_use]
    pub fn display_label(&self) -> &'a str {
        match self {
            Self::Tooth(tooth) => tooth.display_name,
            Self::Gum(mesh_id) => mesh_id,
            Self::Unknown(raw) => raw,
        }
    }

    /// The descriptor, if this identity is a tooth.
    #[must_use]
    pub const fn tooth(&self) -> Option<&'static ToothDescriptor> {
        match self {
            Self::Tooth(tooth) => Some(tooth),
            _ => None,
        }
    }
}
