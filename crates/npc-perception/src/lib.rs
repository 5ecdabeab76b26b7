//! `npc-perception`: can an observer see a target point?
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`layer`]  | `LayerMask`: category filter for occlusion queries            |
//! | [`oracle`] | `OcclusionOracle` trait, `OpenField`, `WallSet`, `Wall`        |
//! | [`cone`]   | `ViewCone`, `Sighting`, `can_detect`                           |
//!
//! Perception is a pure query.  It holds no state between calls, but the
//! oracle reflects external world geometry, so the same inputs can give a
//! different answer on a later tick if the world changed.

pub mod cone;
pub mod layer;
pub mod oracle;

#[cfg(test)]
mod tests;

pub use cone::{COINCIDENT_EPSILON, Sighting, ViewCone, can_detect};
pub use layer::LayerMask;
pub use oracle::{OcclusionOracle, OpenField, Wall, WallSet};
