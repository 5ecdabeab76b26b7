//! `npc-nav`: navigation graph, spatial snapping, and path search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`graph`]   | `NavGraph` (CSR neighbors + R-tree), `NavGraphBuilder`        |
//! | [`astar`]   | `PathFinder` trait, `AStarPathFinder`, `SearchScratch`, `Path`, `find_closest_node` |
//! | [`error`]   | `NavError`, `NavResult<T>`                                    |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` maps for per-search scratch records.      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public value types.    |

pub mod astar;
pub mod error;
pub mod graph;


pub use astar::{
    AStarPathFinder, NodeRecord, Path, PathFinder, SearchScratch, find_closest_node, path_cost,
};
pub use error::{NavError, NavResult};
pub use graph::{NavGraph, NavGraphBuilder};
