//! Alert coordinator: fans a sighting out to every other agent.

use npc_agent::AgentStore;
use npc_core::AgentId;

/// The set of agents an alert can reach.
pub trait AgentRegistry {
    /// Every registered agent, ascending.
    fn agent_ids(&self) -> Vec<AgentId>;

    /// Set `agent`'s target-detected flag.  Returns `false` if the agent is
    /// not registered.
    fn raise_detected(&mut self, agent: AgentId) -> bool;
}

impl AgentRegistry for AgentStore {
    fn agent_ids(&self) -> Vec<AgentId> {
        AgentStore::agent_ids(self).collect()
    }

    fn raise_detected(&mut self, agent: AgentId) -> bool {
        match self.states.get_mut(agent.index()) {
            Some(state) => {
                state.target_detected = true;
                true
            }
            None => false,
        }
    }
}

/// Applies `RaiseAlert` intents against an injected registry.
///
/// The coordinator only ever sets flags; clearing them is up to each
/// agent's controller.
pub struct AlertCoordinator<'a, R: AgentRegistry + ?Sized> {
    registry: &'a mut R,
}

impl<'a, R: AgentRegistry + ?Sized> AlertCoordinator<'a, R> {
    pub fn new(registry: &'a mut R) -> Self {
        Self { registry }
    }

    /// Flag every registered agent except `source`.  Returns how many were
    /// flagged.
    pub fn notify(&mut self, source: AgentId) -> usize {
        let mut flagged = 0;
        for agent in self.registry.agent_ids() {
            if agent != source && self.registry.raise_detected(agent) {
                flagged += 1;
            }
        }
        flagged
    }
}
