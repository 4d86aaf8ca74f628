//! Locator tuning constants.

/// Configuration for surface point location.
///
/// The defaults are the calibrated production values; change them for
/// parity experiments only.
///
/// # Example
///
/// ```
/// use surface_locator::LocatorConfig;
///
/// let config = LocatorConfig::new().with_sample_budget(200);
/// assert_eq!(config.sample_budget, 200);
/// ```
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Maximum number of vertices to sample per call.
    ///
    /// Bounds the cost on dense meshes: the vertex buffer is strided,
    /// never walked in full.
    pub sample_budget: usize,

    /// Weight of the center-to-vertex directional score.
    pub direction_weight: f64,

    /// Weight of the vertex-normal agreement score.
    pub normal_weight: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            sample_budget: 100,
            direction_weight: 0.7,
            normal_weight: 0.3,
        }
    }
}

impl LocatorConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample budget.
    ///
    /// A budget of zero is treated as one sample.
    #[must_use]
    pub const fn with_sample_budget(mut self, budget: usize) -> Self {
        self.sample_budget = budget;
        self
    }

    /// Set the score weights.
    #[must_use]
    pub const fn with_weights(mut self, direction: f64, normal: f64) -> Self {
        self.direction_weight = direction;
        self.normal_weight = normal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_calibration() {
        let config = LocatorConfig::default();
        assert_eq!(config.sample_budget, 100);
        assert!((config.direction_weight - 0.7).abs() < f64::EPSILON);
        assert!((config.normal_weight - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn builders_override() {
        let config = LocatorConfig::new()
            .with_sample_budget(10)
            .with_weights(0.5, 0.5);
        assert_eq!(config.sample_budget, 10);
        assert!((config.direction_weight - 0.5).abs() < f64::EPSILON);
    }
}
