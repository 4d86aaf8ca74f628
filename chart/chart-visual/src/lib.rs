//! Visual models for chart rendering.
//!
//! Two pure-function components consumed by the presentation layer:
//!
//! - **Damage intensity** ([`stress_intensity`], [`stress_color`]) -
//!   maps a tooth's anatomical role and its recorded cavity count to a
//!   pulsing emission intensity and a reddening highlight color for
//!   the animated stress overlay. The pulse phase comes from an
//!   external animation clock; this crate owns no time.
//! - **Label declutter** ([`layout_labels`]) - computes per-note
//!   callout offsets so spatially clustered annotations do not overlap
//!   on screen.
//!
//! Both are deterministic and allocation-light; hosts call them per
//! frame or on demand over the current chart state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod damage;
mod label;

pub use damage::{base_intensity, stress_color, stress_intensity, Rgb, INTENSITY_CEILING};
pub use label::layout_labels;
