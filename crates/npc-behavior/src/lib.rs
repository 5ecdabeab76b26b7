//! `npc-behavior`: the per-agent Idle/Patrol/Chase/Search state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`transition`] | `Observation`, `PathOutcome`, `Transition`, `transition()`    |
//! | [`controller`] | `BehaviorController`: perception, planning, movement intents |
//! | [`config`]     | `BehaviorConfig` (view cone, timers, speeds)                  |
//! | [`context`]    | `TickContext<'a>`: read-only tick snapshot shared by agents  |
//! | [`intent`]     | `Intent` (`MoveTo`, `RaiseAlert`), `Decision`, `StateChange`  |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! The tick loop in npc-sim is split in two phases:
//!
//! 1. **Decide**: for every agent, call `BehaviorController::update` with
//!    that agent's `&mut AgentState` and a shared `&TickContext`.  The
//!    controller writes only the state it was handed.
//!
//! 2. **Apply** (sequential, ascending `AgentId`): consume the collected
//!    intents.  `MoveTo` drives the motion primitive, `RaiseAlert` goes to
//!    the alert coordinator.
//!
//! Which state follows which is decided by the pure [`transition()`] table,
//! so the rules can be tested without graphs, perception or movement.

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod intent;
pub mod transition;


pub use npc_agent::BehaviorState;

pub use config::BehaviorConfig;
pub use context::TickContext;
pub use controller::BehaviorController;
pub use error::{BehaviorError, BehaviorResult};
pub use intent::{Decision, Intent, StateChange};
pub use transition::{Observation, PathOutcome, Transition, transition};
