use npc_behavior::BehaviorError;
use npc_core::{AgentId, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("patrol route of {agent} references {node}, which is not in the graph")]
    UnknownNode {
        agent: AgentId,
        node:  NodeId,
    },

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[cfg(feature = "parallel")]
    #[error("could not build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
