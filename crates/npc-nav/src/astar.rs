//! Path search trait and the default A* implementation.
//!
//! # Pluggability
//!
//! Callers reach the search through the [`PathFinder`] trait so a different
//! algorithm can be swapped in without touching the behavior layer.
//!
//! # Scratch state
//!
//! The per-node search bookkeeping (`g`, `h`, `came_from`, open/closed) lives
//! in a [`SearchScratch`] owned by one search, keyed by `NodeId`.  The graph
//! itself is never written, so any number of searches may run over the same
//! `&NavGraph` at once.
//!
//! # Tie-break
//!
//! The open set is a min-heap keyed on `(f, NodeId)`: among nodes with equal
//! `f` the lowest `NodeId` is expanded first.  Outputs are therefore fully
//! deterministic for a given graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;
use ordered_float::OrderedFloat;

use npc_core::{NodeId, Vec2, geo};

use crate::{NavError, NavGraph, NavResult};

#[cfg(feature = "fx-hash")]
type ScratchMap = rustc_hash::FxHashMap<NodeId, NodeRecord>;
#[cfg(not(feature = "fx-hash"))]
type ScratchMap = std::collections::HashMap<NodeId, NodeRecord>;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a successful search: the nodes from start to goal inclusive
/// and the summed Euclidean length of the hops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub cost: f32,
}

impl Path {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if start and goal are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Summed Euclidean length of consecutive hops in `nodes`.
pub fn path_cost(graph: &NavGraph, nodes: &[NodeId]) -> f32 {
    nodes
        .windows(2)
        .map(|w| geo::distance(graph.position(w[0]), graph.position(w[1])))
        .sum()
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// Implementations must be `Send + Sync` so the behavior phase can run on
/// Rayon workers with a shared finder.
pub trait PathFinder: Send + Sync {
    /// Shortest node sequence from `start` to `goal`, both included.
    ///
    /// `start == goal` yields a single-node path.  An unreachable goal is
    /// [`NavError::PathNotFound`]; a partial path is never returned.
    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> NavResult<Path>;
}

// ── Scratch ───────────────────────────────────────────────────────────────────

/// Bookkeeping for one node during one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRecord {
    /// Best known cost from the start.
    pub g: f32,
    /// Heuristic estimate to the goal.
    pub h: f32,
    /// Predecessor on the best known path; `INVALID` for the start node.
    pub came_from: NodeId,
    /// Finalized (in the closed set).
    pub closed: bool,
}

impl NodeRecord {
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Per-search open/closed state.
///
/// A node with a record that is not `closed` is in the open set; a node with
/// no record has `g = +inf`.  Reuse one scratch across searches to keep its
/// allocations; it is cleared at the start of every search.
#[derive(Default)]
pub struct SearchScratch {
    records:  ScratchMap,
    open:     BinaryHeap<Reverse<(OrderedFloat<f32>, NodeId)>>,
    expanded: usize,
}

impl SearchScratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.open.clear();
        self.expanded = 0;
    }

    pub fn record(&self, node: NodeId) -> Option<&NodeRecord> {
        self.records.get(&node)
    }

    /// `g` of `node` in the last search, `+inf` if it was never reached.
    pub fn g_cost(&self, node: NodeId) -> f32 {
        self.records.get(&node).map_or(f32::INFINITY, |r| r.g)
    }

    /// Nodes moved to the closed set during the last search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn push_open(&mut self, node: NodeId, f: f32) {
        self.open.push(Reverse((OrderedFloat(f), node)));
    }
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// Best-first A* with a straight-line heuristic.
///
/// Edge cost equals the geometric distance between neighbors, which makes the
/// Euclidean heuristic admissible and consistent, so returned paths are
/// shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathFinder;

impl AStarPathFinder {
    /// Search using caller-owned scratch storage.
    pub fn find_path_with(
        &self,
        graph:   &NavGraph,
        start:   NodeId,
        goal:    NodeId,
        scratch: &mut SearchScratch,
    ) -> NavResult<Path> {
        let goal_pos = graph.get_position(goal)?;
        let start_pos = graph.get_position(start)?;

        scratch.clear();
        let h0 = geo::distance(start_pos, goal_pos);
        scratch.records.insert(
            start,
            NodeRecord { g: 0.0, h: h0, came_from: NodeId::INVALID, closed: false },
        );
        scratch.push_open(start, h0);

        while let Some(Reverse((OrderedFloat(f), node))) = scratch.open.pop() {
            let Some(&current) = scratch.records.get(&node) else {
                continue;
            };
            // Skip heap entries superseded by a cheaper push or already closed.
            if current.closed || f > current.f() {
                continue;
            }

            if node == goal {
                let path = reconstruct(scratch, goal, current.g);
                trace!(
                    "a*: {start} -> {goal}: {} nodes, cost {:.3}, {} expanded",
                    path.len(),
                    path.cost,
                    scratch.expanded,
                );
                return Ok(path);
            }

            if let Some(rec) = scratch.records.get_mut(&node) {
                rec.closed = true;
            }
            scratch.expanded += 1;

            let node_pos = graph.position(node);
            for &neighbor in graph.neighbors(node) {
                let neighbor_pos = graph.position(neighbor);
                let tentative = current.g + geo::distance(node_pos, neighbor_pos);

                let pushed = match scratch.records.get_mut(&neighbor) {
                    Some(rec) if rec.closed => None,
                    Some(rec) => {
                        if tentative < rec.g {
                            rec.g = tentative;
                            rec.came_from = node;
                            Some(rec.f())
                        } else {
                            None
                        }
                    }
                    None => {
                        let rec = NodeRecord {
                            g: tentative,
                            h: heuristic(neighbor_pos, goal_pos),
                            came_from: node,
                            closed: false,
                        };
                        scratch.records.insert(neighbor, rec);
                        Some(rec.f())
                    }
                };
                if let Some(f) = pushed {
                    scratch.push_open(neighbor, f);
                }
            }
        }

        trace!("a*: {start} -> {goal}: not found after {} expanded", scratch.expanded);
        Err(NavError::PathNotFound { from: start, to: goal })
    }
}

impl PathFinder for AStarPathFinder {
    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> NavResult<Path> {
        let mut scratch = SearchScratch::new();
        self.find_path_with(graph, start, goal, &mut scratch)
    }
}

#[inline]
fn heuristic(from: Vec2, goal: Vec2) -> f32 {
    geo::distance(from, goal)
}

fn reconstruct(scratch: &SearchScratch, goal: NodeId, total: f32) -> Path {
    let mut nodes = Vec::new();
    let mut cur = goal;
    while cur.is_valid() {
        nodes.push(cur);
        cur = scratch.records.get(&cur).map_or(NodeId::INVALID, |r| r.came_from);
    }
    nodes.reverse();
    Path { nodes, cost: total }
}

// ── Closest node ──────────────────────────────────────────────────────────────

/// The candidate closest to `position`, by linear scan.
///
/// Ties go to the first candidate encountered.  An empty candidate slice is
/// [`NavError::EmptyCandidateSet`] and an id outside the graph is
/// [`NavError::NodeNotFound`].
pub fn find_closest_node(
    graph:      &NavGraph,
    position:   Vec2,
    candidates: &[NodeId],
) -> NavResult<NodeId> {
    let (&first, rest) = candidates.split_first().ok_or(NavError::EmptyCandidateSet)?;
    let mut best = first;
    let mut best_dist = geo::distance(graph.get_position(first)?, position);
    for &candidate in rest {
        let d = geo::distance(graph.get_position(candidate)?, position);
        if d < best_dist {
            best = candidate;
            best_dist = d;
        }
    }
    Ok(best)
}
