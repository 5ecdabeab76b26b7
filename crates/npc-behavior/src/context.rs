//! Read-only world state passed to every controller update.

use npc_core::{Tick, Vec2};
use npc_nav::{NavGraph, PathFinder};
use npc_perception::OcclusionOracle;

/// A read-only snapshot of the world for one tick.
///
/// Built once per tick by npc-sim and shared immutably across all agents
/// during the decide phase.  Every borrow lives for that phase only.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Seconds one tick represents.
    pub dt: f32,

    /// Position of the entity agents look for.  `None` while it is absent
    /// from the scene; nothing is detected then.
    pub target: Option<Vec2>,

    /// Static navigation graph.
    pub graph: &'a NavGraph,

    /// Path search over `graph`.
    pub finder: &'a dyn PathFinder,

    /// Line-of-sight queries against world geometry.
    pub oracle: &'a dyn OcclusionOracle,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:   Tick,
        dt:     f32,
        target: Option<Vec2>,
        graph:  &'a NavGraph,
        finder: &'a dyn PathFinder,
        oracle: &'a dyn OcclusionOracle,
    ) -> Self {
        Self { tick, dt, target, graph, finder, oracle }
    }
}
