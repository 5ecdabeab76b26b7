//! Simulation observer trait for progress reporting and data collection.

use npc_agent::AgentStore;
use npc_behavior::StateChange;
use npc_core::{AgentId, Tick};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl SimObserver for TransitionPrinter {
///     fn on_transition(&mut self, tick: Tick, agent: AgentId, change: StateChange) {
///         println!("{tick}: {agent} {} -> {}", change.from, change.to);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called during the apply phase for each agent whose behavior state
    /// changed this tick, in ascending `AgentId` order.
    fn on_transition(&mut self, _tick: Tick, _agent: AgentId, _change: StateChange) {}

    /// Called after `source`'s alert has been applied; `flagged` agents had
    /// their detection flag set.
    fn on_alert(&mut self, _tick: Tick, _source: AgentId, _flagged: usize) {}

    /// Called at the end of each tick.  `moved` is the number of agents that
    /// applied a move this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to all agent state.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
