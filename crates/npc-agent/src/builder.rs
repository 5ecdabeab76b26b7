//! Builder for constructing an `AgentStore` one agent at a time.
//!
//! # Usage
//!
//! ```rust
//! use npc_agent::{AgentStoreBuilder, BehaviorState};
//! use npc_core::{NodeId, Vec2};
//!
//! let mut builder = AgentStoreBuilder::new();
//! let guard = builder.spawn(Vec2::ZERO, Vec2::X, vec![NodeId(0), NodeId(3)]);
//! let store = builder.build();
//!
//! assert_eq!(store.count, 1);
//! assert_eq!(store.state(guard).behavior, BehaviorState::Idle);
//! ```

use npc_core::{AgentId, NodeId, Vec2};

use crate::{AgentState, AgentStore, Kinematics};

/// Accumulates agents, assigning ids in spawn order.
#[derive(Debug, Default)]
pub struct AgentStoreBuilder {
    states:     Vec<AgentState>,
    kinematics: Vec<Kinematics>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `count` agents.
    pub fn with_capacity(count: usize) -> Self {
        Self {
            states:     Vec::with_capacity(count),
            kinematics: Vec::with_capacity(count),
        }
    }

    /// Add an agent at `position` facing `forward`, patrolling
    /// `patrol_route` once it leaves Idle.  Returns its id.
    ///
    /// The route is not checked here; `SimBuilder` rejects nodes that are
    /// missing from the graph.
    pub fn spawn(&mut self, position: Vec2, forward: Vec2, patrol_route: Vec<NodeId>) -> AgentId {
        let id = AgentId(self.states.len() as u32);
        self.states.push(AgentState::new(patrol_route));
        self.kinematics.push(Kinematics::new(position, forward));
        id
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn build(self) -> AgentStore {
        AgentStore::new(self.states, self.kinematics)
    }
}
