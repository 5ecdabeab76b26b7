//! Navigation error type.

use thiserror::Error;

use npc_core::NodeId;

/// Errors produced by `npc-nav`.
///
/// Every variant is recoverable: callers fall back locally (see the behavior
/// controller) and the graph is never left in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no path from {from} to {to}")]
    PathNotFound { from: NodeId, to: NodeId },

    #[error("closest-node query over an empty candidate set")]
    EmptyCandidateSet,

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type NavResult<T> = Result<T, NavError>;
