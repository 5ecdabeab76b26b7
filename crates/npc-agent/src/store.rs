//! Agent storage: one `Vec` per concern, indexed by `AgentId`.
//!
//! # Why separate arrays?
//!
//! The decide phase needs `&mut AgentState` for each agent and `&Kinematics`
//! for the same agent at once, possibly on Rayon workers.  Keeping the two
//! in distinct public `Vec`s lets the caller borrow them disjointly:
//!
//! ```ignore
//! // npc-sim decide phase (simplified):
//! let intents: Vec<_> = store.states
//!     .iter_mut()
//!     .zip(store.kinematics.iter())
//!     .enumerate()
//!     .map(|(i, (state, body))| controller.update(AgentId(i as u32), state, body, &ctx))
//!     .collect();
//! ```

use npc_core::{AgentId, CoreError, CoreResult};

use crate::{AgentState, Kinematics};

/// Structure-of-Arrays storage for all agents.
///
/// Every `Vec` field has exactly `count` elements and `AgentId` is the index
/// into all of them.  Agents are never removed, so ids stay dense and
/// ascending-id order equals registration order.
#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Behavior state per agent.
    pub states: Vec<AgentState>,

    /// Body position and facing per agent.
    pub kinematics: Vec<Kinematics>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Panics if `agent` is out of range.
    #[inline]
    pub fn state(&self, agent: AgentId) -> &AgentState {
        &self.states[agent.index()]
    }

    /// Panics if `agent` is out of range.
    #[inline]
    pub fn state_mut(&mut self, agent: AgentId) -> &mut AgentState {
        &mut self.states[agent.index()]
    }

    /// Panics if `agent` is out of range.
    #[inline]
    pub fn body(&self, agent: AgentId) -> &Kinematics {
        &self.kinematics[agent.index()]
    }

    /// Panics if `agent` is out of range.
    #[inline]
    pub fn body_mut(&mut self, agent: AgentId) -> &mut Kinematics {
        &mut self.kinematics[agent.index()]
    }

    pub fn get_state(&self, agent: AgentId) -> CoreResult<&AgentState> {
        self.states.get(agent.index()).ok_or(CoreError::AgentNotFound(agent))
    }

    pub fn get_body(&self, agent: AgentId) -> CoreResult<&Kinematics> {
        self.kinematics.get(agent.index()).ok_or(CoreError::AgentNotFound(agent))
    }

    pub(crate) fn new(states: Vec<AgentState>, kinematics: Vec<Kinematics>) -> Self {
        debug_assert_eq!(states.len(), kinematics.len());
        Self { count: states.len(), states, kinematics }
    }
}
