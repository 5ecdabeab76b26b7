//! `npc-agent`: per-agent state and storage for the `rust_npc` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`state`]   | `BehaviorState`, `AgentState`, `ActivePath`, `PathPurpose`     |
//! | [`motion`]  | `Motion` primitive trait, `Kinematics`, `step_toward`          |
//! | [`store`]   | `AgentStore` (SoA arrays indexed by `AgentId`)                 |
//! | [`builder`] | `AgentStoreBuilder` (spawn agents, then build)                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.  |

pub mod builder;
pub mod motion;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use motion::{Kinematics, Motion, step_toward};
pub use state::{ActivePath, AgentState, BehaviorState, PathPurpose};
pub use store::AgentStore;
