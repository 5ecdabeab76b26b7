//! Navigation graph representation and builder.
//!
//! # Data layout
//!
//! Nodes live in an arena addressed by `NodeId`.  Neighbor lists use
//! **Compressed Sparse Row (CSR)** format: the neighbors of node `n` occupy
//!
//! ```text
//! neighbor_ids[ neighbor_start[n] .. neighbor_start[n+1] ]
//! ```
//!
//! Neighbors are indices, never owning references, so the cyclic adjacency of
//! a walkable graph needs no reference counting.  Edge cost is always the
//! Euclidean distance between the endpoint positions and is computed at search
//! time.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a scene position to the nearest `NodeId`.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use npc_core::{NodeId, Vec2};

use crate::{NavError, NavResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// Static navigation graph: node positions, CSR neighbor lists, and a spatial
/// index for snapping positions to nodes.
///
/// Read-only once built; construct with [`NavGraphBuilder`].
pub struct NavGraph {
    /// Scene position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Vec2>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub neighbor_start: Vec<u32>,

    /// Flattened neighbor lists, sorted by source node then by target id.
    pub neighbor_ids: Vec<NodeId>,

    spatial_idx: RTree<NodeEntry>,
}

impl NavGraph {
    /// A graph with no nodes.  Every search against it fails with
    /// [`NavError::NodeNotFound`].
    pub fn empty() -> Self {
        NavGraphBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed links (an undirected link counts twice).
    pub fn link_count(&self) -> usize {
        self.neighbor_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// Position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph; use [`get_position`](Self::get_position)
    /// for unchecked ids.
    #[inline]
    pub fn position(&self, node: NodeId) -> Vec2 {
        self.node_pos[node.index()]
    }

    pub fn get_position(&self, node: NodeId) -> NavResult<Vec2> {
        self.node_pos
            .get(node.index())
            .copied()
            .ok_or(NavError::NodeNotFound(node))
    }

    /// Neighbors of `node` in ascending id order.  A contiguous slice, no
    /// allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.neighbor_start[node.index()] as usize;
        let end   = self.neighbor_start[node.index() + 1] as usize;
        &self.neighbor_ids[start..end]
    }

    #[inline]
    pub fn are_neighbors(&self, a: NodeId, b: NodeId) -> bool {
        self.contains(a) && self.neighbors(a).binary_search(&b).is_ok()
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_pos.len() as u32).map(NodeId)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest node to `pos` over the whole graph.
    ///
    /// Among equidistant nodes the lowest `NodeId` wins, so the answer is the
    /// same as a first-minimum linear scan in id order.  Returns `None` only
    /// for an empty graph.
    pub fn snap_to_node(&self, pos: Vec2) -> Option<NodeId> {
        let mut iter = self
            .spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[pos.x, pos.y]);
        let (first, best) = iter.next()?;
        let mut winner = first.id;
        for (entry, d2) in iter {
            if d2 > best {
                break;
            }
            winner = winner.min(entry.id);
        }
        Some(winner)
    }
}

// ── NavGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use npc_core::Vec2;
/// use npc_nav::NavGraphBuilder;
///
/// let mut b = NavGraphBuilder::new();
/// let a = b.add_node(Vec2::new(0.0, 0.0));
/// let c = b.add_node(Vec2::new(4.0, 0.0));
/// b.add_link(a, c).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.link_count(), 2); // symmetric
/// ```
pub struct NavGraphBuilder {
    nodes: Vec<Vec2>,
    links: Vec<(NodeId, NodeId)>,
}

impl NavGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), links: Vec::new() }
    }

    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(links),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Vec2) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Make `to` a neighbor of `from` (one direction only).
    pub fn add_directed_link(&mut self, from: NodeId, to: NodeId) -> NavResult<()> {
        for id in [from, to] {
            if id.index() >= self.nodes.len() {
                return Err(NavError::NodeNotFound(id));
            }
        }
        self.links.push((from, to));
        Ok(())
    }

    /// Make `a` and `b` mutual neighbors, the usual case for walkable graphs.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> NavResult<()> {
        self.add_directed_link(a, b)?;
        self.add_directed_link(b, a)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Consume the builder and produce a [`NavGraph`].
    ///
    /// Self-links and duplicate links are dropped.
    pub fn build(self) -> NavGraph {
        let node_count = self.nodes.len();

        let mut links = self.links;
        links.retain(|(from, to)| from != to);
        links.sort_unstable();
        links.dedup();

        let neighbor_ids: Vec<NodeId> = links.iter().map(|&(_, to)| to).collect();

        let mut neighbor_start = vec![0u32; node_count + 1];
        for &(from, _) in &links {
            neighbor_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            neighbor_start[i] += neighbor_start[i - 1];
        }
        debug_assert_eq!(neighbor_start[node_count] as usize, neighbor_ids.len());

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry { point: [pos.x, pos.y], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        NavGraph {
            node_pos: self.nodes,
            neighbor_start,
            neighbor_ids,
            spatial_idx,
        }
    }
}

impl Default for NavGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
