//! Cavity severity grades.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity of a cavity reported by external scan data.
///
/// Only meaningful for bulk-imported markers; manually placed markers
/// carry no severity and size themselves by stacking order instead.
///
/// # Example
///
/// ```
/// use chart_types::Severity;
///
/// let (lo, hi) = Severity::Moderate.size_range();
/// assert!(lo < hi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Early-stage decay.
    Mild,
    /// Established decay.
    Moderate,
    /// Deep decay.
    Severe,
}

impl Severity {
    /// The visual marker size range for this grade, `(min, max)`.
    ///
    /// Imported markers draw a size from this range with a small jitter
    /// so identical grades do not render as identical spheres. The
    /// jitter is cosmetic only and carries no clinical meaning.
    #[must_use]
    pub const fn size_range(self) -> (f64, f64) {
        match self {
            Self::Mild => (0.025, 0.035),
            Self::Moderate => (0.035, 0.05),
            Self::Severe => (0.05, 0.07),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_ordered_and_contiguous() {
        let (mild_lo, mild_hi) = Severity::Mild.size_range();
        let (mod_lo, mod_hi) = Severity::Moderate.size_range();
        let (sev_lo, sev_hi) = Severity::Severe.size_range();

        assert!(mild_lo < mild_hi);
        assert!(mod_lo < mod_hi);
        assert!(sev_lo < sev_hi);
        assert!(mild_hi <= mod_lo + f64::EPSILON);
        assert!(mod_hi <= sev_lo + f64::EPSILON);
    }

    #[test]
    fn grades_order_by_severity() {
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
    }
}
