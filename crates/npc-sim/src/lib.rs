//! `npc-sim`: tick loop orchestrator for the rust_npc framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide   for every agent: perception, then BehaviorController::update
//!              (parallel with the `parallel` feature).  Each update writes
//!              only its own AgentState.
//!   ② Apply    for each decision in ascending AgentId order:
//!                MoveTo { target } → Motion::face + Motion::move_forward
//!                RaiseAlert        → AlertCoordinator::notify(source)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon (`num_threads` sizes a pool). |
//! | `fx-hash`  | FxHash scratch maps in npc-nav's A*.                        |
//! | `serde`    | Serde derives on all public value types.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use npc_agent::AgentStoreBuilder;
//! use npc_core::{SimConfig, Vec2};
//! use npc_nav::AStarPathFinder;
//! use npc_perception::OpenField;
//! use npc_sim::{NoopObserver, SimBuilder};
//!
//! let mut agents = AgentStoreBuilder::new();
//! agents.spawn(Vec2::ZERO, Vec2::X, route);
//! let mut sim = SimBuilder::new(config, agents.build(), graph, AStarPathFinder, OpenField)
//!     .target(Vec2::new(4.0, 0.0))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod alert;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use alert::{AgentRegistry, AlertCoordinator};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
