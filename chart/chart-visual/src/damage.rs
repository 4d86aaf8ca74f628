//! Damage-weighted emission intensity for the stress overlay.

use std::f64::consts::TAU;
use tooth_registry::ToothRole;

/// Visual stress added per recorded cavity.
const CAVITY_STRESS: f64 = 0.2;

/// Ceiling for the un-pulsed intensity.
pub const INTENSITY_CEILING: f64 = 1.5;

/// Cavity count at which the highlight color saturates to dark red.
const COLOR_SATURATION_COUNT: f64 = 5.0;

/// Base emission intensity for a tooth role.
///
/// Reflects real chewing-force distribution: molars carry the most
/// load, central incisors the least. The relative ordering is domain
/// data, not a tuning choice.
#[must_use]
pub const fn base_intensity(role: ToothRole) -> f64 {
    match role {
        ToothRole::FirstMolar => 0.75,
        ToothRole::SecondMolar => 0.65,
        ToothRole::FirstPremolar => 0.55,
        ToothRole::SecondPremolar => 0.5,
        ToothRole::Canine => 0.4,
        ToothRole::LateralIncisor => 0.3,
        ToothRole::CentralIncisor => 0.25,
    }
}

/// Pulsing emission intensity for a tooth under the stress overlay.
///
/// Each recorded cavity adds 0.2 to the role's base; the sum is
/// clamped to [`INTENSITY_CEILING`] and then pulsed
/// between 0.5x and 1.2x by `phase`, which an external animation clock
/// sweeps through `[0, 1)` to simulate bite contact.
///
/// # Example
///
/// ```
/// use chart_visual::stress_intensity;
/// use tooth_registry::ToothRole;
///
/// // Trough of the pulse: 0.75 * 0.5.
/// let i = stress_intensity(ToothRole::FirstMolar, 0, 0.0);
/// assert!((i - 0.375).abs() < 1e-12);
/// ```
#[must_use]
pub fn stress_intensity(role: ToothRole, cavity_count: usize, phase: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)] // cavity counts are tiny
    let loaded = (cavity_count as f64).mul_add(CAVITY_STRESS, base_intensity(role));
    let clamped = loaded.min(INTENSITY_CEILING);

    // 0.5 + 0.35 * (1 - cos) swings the factor over [0.5, 1.2].
    let pulse = (1.0 - (TAU * phase).cos()).mul_add(0.35, 0.5);
    clamped * pulse
}

/// An RGB color with float components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Create a color from components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: (other.r - self.r).mul_add(t, self.r),
            g: (other.g - self.g).mul_add(t, self.g),
            b: (other.b - self.b).mul_add(t, self.b),
        }
    }
}

/// Highlight color where damage is recorded.
const LIGHT_RED: Rgb = Rgb::new(1.0, 0.45, 0.4);

/// Highlight color at full saturation.
const DARK_RED: Rgb = Rgb::new(0.55, 0.06, 0.04);

/// Highlight color for a tooth's recorded damage.
///
/// Interpolates a light-red to dark-red gradient, saturating at five
/// recorded cavities.
#[must_use]
pub fn stress_color(cavity_count: usize) -> Rgb {
    #[allow(clippy::cast_precision_loss)] // cavity counts are tiny
    let t = ((cavity_count as f64 / COLOR_SATURATION_COUNT).min(1.0)) as f32;
    LIGHT_RED.lerp(DARK_RED, t)
}
