//! Fluent builder for constructing a [`Sim`].

use npc_agent::AgentStore;
use npc_behavior::{BehaviorConfig, BehaviorController};
use npc_core::{AgentId, NodeId, SimConfig, Vec2};
use npc_nav::{NavGraph, PathFinder};
use npc_perception::OcclusionOracle;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<F, O>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick length, total ticks, seed, threads
/// - [`AgentStore`]: from [`npc_agent::AgentStoreBuilder`]
/// - [`NavGraph`]: from [`npc_nav::NavGraphBuilder`]
/// - `F: PathFinder`: the search algorithm (e.g. [`npc_nav::AStarPathFinder`])
/// - `O: OcclusionOracle`: line-of-sight queries (e.g. [`npc_perception::WallSet`])
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                              |
/// |----------------------|--------------------------------------|
/// | `.behavior(c)`       | `BehaviorConfig::default()`          |
/// | `.target(p)`         | No target in the scene               |
/// | `.patrol_routes(v)`  | Routes given to `AgentStoreBuilder::spawn` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, agents, graph, AStarPathFinder, walls)
///     .behavior(BehaviorConfig { view_distance: 8.0, ..Default::default() })
///     .target(Vec2::new(12.0, 4.0))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<F: PathFinder, O: OcclusionOracle> {
    config:   SimConfig,
    agents:   AgentStore,
    graph:    NavGraph,
    finder:   F,
    oracle:   O,
    behavior: BehaviorConfig,
    target:   Option<Vec2>,
    routes:   Option<Vec<Vec<NodeId>>>,
}

impl<F: PathFinder, O: OcclusionOracle> SimBuilder<F, O> {
    pub fn new(config: SimConfig, agents: AgentStore, graph: NavGraph, finder: F, oracle: O) -> Self {
        Self {
            config,
            agents,
            graph,
            finder,
            oracle,
            behavior: BehaviorConfig::default(),
            target:   None,
            routes:   None,
        }
    }

    pub fn behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Initial position of the entity agents look for.
    pub fn target(mut self, target: Vec2) -> Self {
        self.target = Some(target);
        self
    }

    /// Replace every agent's patrol route.  Must be length `agent_count`.
    pub fn patrol_routes(mut self, routes: Vec<Vec<NodeId>>) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<F, O>> {
        self.config.validate().map_err(|e| SimError::Config(e.to_string()))?;
        let controller = BehaviorController::new(self.behavior)?;

        let agent_count = self.agents.count;
        if let Some(routes) = self.routes.take() {
            if routes.len() != agent_count {
                return Err(SimError::AgentCountMismatch {
                    expected: agent_count,
                    got:      routes.len(),
                    what:     "patrol routes",
                });
            }
            for (state, route) in self.agents.states.iter_mut().zip(routes) {
                state.patrol_route = route;
                state.patrol_index = 0;
            }
        }

        for (i, state) in self.agents.states.iter().enumerate() {
            if let Some(&node) = state.patrol_route.iter().find(|&&n| !self.graph.contains(n)) {
                return Err(SimError::UnknownNode { agent: AgentId(i as u32), node });
            }
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        Ok(Sim {
            clock:  self.config.make_clock(),
            config: self.config,
            agents: self.agents,
            graph:  self.graph,
            finder: self.finder,
            oracle: self.oracle,
            controller,
            target: self.target,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
