//! Tooth identity registry for the DentaForge annotation engine.
//!
//! The jaw model's meshes carry only anonymous object identifiers
//! (`jaw.005`, `gums.upper`). This crate translates those identifiers
//! into anatomical meaning and back:
//!
//! - [`describe`] - mesh identifier to [`MeshIdentity`]
//! - [`resolve`] - display name + quadrant to mesh identifier
//! - [`resolve_by_number`] - universal tooth number to mesh identifier
//!
//! The mapping is a compiled constant table of the 28 permanent teeth
//! (universal numbers 2-15 and 18-31; third molars are not part of the
//! model) plus the two gum meshes. It is populated once and never
//! mutated; every lookup is a pure function with no failure mode
//! beyond "not found".
//!
//! # Example
//!
//! ```
//! use tooth_registry::{describe, resolve, MeshIdentity, Quadrant};
//!
//! let MeshIdentity::Tooth(tooth) = describe("jaw.005") else {
//!     panic!("jaw.005 is a tooth");
//! };
//! assert_eq!(tooth.display_name, "Canine");
//! assert_eq!(tooth.quadrant, Quadrant::UpperRight);
//!
//! // Reverse lookup, as used for natural-language commands.
//! assert_eq!(resolve("canine", Quadrant::UpperRight), Some("jaw.005"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod descriptor;
mod registry;
mod table;

pub use descriptor::{MeshIdentity, ParseQuadrantError, Quadrant, ToothDescriptor, ToothRole};
pub use registry::{describe, resolve, resolve_by_number};
pub use table::{GUM_MESH_IDS, TOOTH_TABLE};
