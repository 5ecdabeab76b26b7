//! Framework error type.
//!
//! Sub-crates define their own error enums (`NavError`, `BehaviorError`,
//! `SimError`) and may wrap `CoreError` as one variant.

use thiserror::Error;

use crate::{AgentId, NodeId};

/// The base error type for `npc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `npc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
