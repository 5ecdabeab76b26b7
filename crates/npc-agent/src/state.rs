//! Per-agent behavior state.

use std::fmt;

use npc_core::NodeId;

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// The four behavior states an agent can be in.  Every agent starts `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    #[default]
    Idle,
    Patrol,
    Chase,
    Search,
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BehaviorState::Idle   => "idle",
            BehaviorState::Patrol => "patrol",
            BehaviorState::Chase  => "chase",
            BehaviorState::Search => "search",
        };
        f.write_str(name)
    }
}

// ── ActivePath ────────────────────────────────────────────────────────────────

/// Why an agent is following its current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathPurpose {
    /// Leg toward patrol waypoint `i` (an index into the patrol route).
    Patrol(usize),
    /// Leg toward the node nearest the target's last known position.
    Search,
    /// Straight line to patrol waypoint `i` after no path to it was found.
    /// Finishing it advances the patrol index like a `Patrol` leg.
    Direct(usize),
    /// A finished search path walked backwards.  Finishing it does not
    /// advance the patrol index.
    Retrace,
}

/// A path being followed.  `nodes[index]` is the next waypoint; the path is
/// exhausted once `index == nodes.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePath {
    pub nodes:   Vec<NodeId>,
    pub index:   usize,
    pub purpose: PathPurpose,
}

impl ActivePath {
    pub fn new(nodes: Vec<NodeId>, purpose: PathPurpose) -> Self {
        Self { nodes, index: 0, purpose }
    }

    /// The waypoint the agent is currently heading for.
    #[inline]
    pub fn next_node(&self) -> Option<NodeId> {
        self.nodes.get(self.index).copied()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.nodes.len()
    }

    /// Mark the current waypoint reached.
    #[inline]
    pub fn advance(&mut self) {
        if self.index < self.nodes.len() {
            self.index += 1;
        }
    }

    /// Waypoints already reached, in travel order.
    pub fn consumed(&self) -> &[NodeId] {
        &self.nodes[..self.index.min(self.nodes.len())]
    }

    /// Waypoints still ahead, starting with [`next_node`](Self::next_node).
    pub fn remaining(&self) -> &[NodeId] {
        &self.nodes[self.index.min(self.nodes.len())..]
    }

    /// The consumed part of this path reversed, for walking back.
    pub fn reversed(&self) -> ActivePath {
        let mut nodes = self.consumed().to_vec();
        nodes.reverse();
        ActivePath::new(nodes, PathPurpose::Retrace)
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Everything the behavior controller remembers about one agent between
/// ticks.
///
/// Only the controller writes these fields during the decide phase.  The
/// alert coordinator writes `target_detected` during the apply phase, and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub behavior: BehaviorState,

    /// Path currently being followed, if any.
    pub path: Option<ActivePath>,

    /// Set by the alert coordinator when another agent spotted the target.
    pub target_detected: bool,

    /// Default patrol route: graph nodes visited cyclically.
    pub patrol_route: Vec<NodeId>,

    /// Index into `patrol_route` of the waypoint being patrolled toward.
    pub patrol_index: usize,

    /// Seconds spent idle since the timer was last reset.
    pub idle_timer: f32,

    /// Node nearest the target when the current search path was planned.
    /// `NodeId::INVALID` when no search is in progress.
    pub last_known_target: NodeId,
}

impl AgentState {
    pub fn new(patrol_route: Vec<NodeId>) -> Self {
        Self { patrol_route, ..Self::default() }
    }

    #[inline]
    pub fn has_patrol_route(&self) -> bool {
        !self.patrol_route.is_empty()
    }

    /// The patrol waypoint currently being approached.
    #[inline]
    pub fn patrol_waypoint(&self) -> Option<NodeId> {
        self.patrol_route.get(self.patrol_index).copied()
    }

    /// Move to the next patrol waypoint, wrapping at the end of the route.
    pub fn advance_patrol(&mut self) {
        if self.patrol_route.is_empty() {
            return;
        }
        self.patrol_index = (self.patrol_index + 1) % self.patrol_route.len();
    }

    pub fn set_path(&mut self, nodes: Vec<NodeId>, purpose: PathPurpose) {
        self.path = Some(ActivePath::new(nodes, purpose));
    }

    pub fn clear_path(&mut self) {
        self.path = None;
    }

    /// `true` if there is no path or the path has been walked to the end.
    pub fn path_exhausted(&self) -> bool {
        self.path.as_ref().is_none_or(ActivePath::is_exhausted)
    }

    #[inline]
    pub fn reset_idle(&mut self) {
        self.idle_timer = 0.0;
    }
}
