//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `WaypointId n`, its neighbors occupy the slice:
//!
//! ```text
//! link_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Neighbor access is therefore a contiguous, allocation-free slice — which
//! is exactly what the random-walk patrol needs each time it picks the next
//! node.
//!
//! # Conventions
//!
//! Links are directed in storage; [`WaypointGraphBuilder::add_link`] inserts
//! both directions, making symmetry a convention of the data rather than an
//! enforced invariant.  Lookups with stale or invalid IDs return empty/`None`
//! — agents hold weak references into this graph and must never be able to
//! crash the tick by pointing at a node that does not exist.

use sn_core::{Vec3, WaypointId};

// ── WaypointGraph ─────────────────────────────────────────────────────────────

/// Named points with adjacency, in CSR format.  Read-only to agents.
///
/// Do not construct directly; use [`WaypointGraphBuilder`].
#[derive(Debug)]
pub struct WaypointGraph {
    /// Position of each waypoint.  Indexed by `WaypointId`.
    node_pos: Vec<Vec3>,

    /// Human-readable name of each waypoint (unique within one graph by
    /// builder construction).
    node_name: Vec<String>,

    /// CSR row pointer.  Neighbors of node `n` are at
    /// `link_to[node_out_start[n] .. node_out_start[n+1]]`.
    /// Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    /// Flattened neighbor lists, sorted by source node.
    link_to: Vec<WaypointId>,
}

impl WaypointGraph {
    /// An empty graph: every lookup misses, every walk is a no-op.
    pub fn empty() -> Self {
        WaypointGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Position of `node`, or `None` for an invalid ID.
    #[inline]
    pub fn position(&self, node: WaypointId) -> Option<Vec3> {
        self.node_pos.get(node.index()).copied()
    }

    /// Name of `node`, or `None` for an invalid ID.
    pub fn name(&self, node: WaypointId) -> Option<&str> {
        self.node_name.get(node.index()).map(String::as_str)
    }

    /// Find a waypoint by name.  Linear scan: graphs here are tens of nodes,
    /// and the lookup happens at configuration time, not per tick.
    pub fn find(&self, name: &str) -> Option<WaypointId> {
        self.node_name
            .iter()
            .position(|n| n == name)
            .map(|i| WaypointId(i as u32))
    }

    /// Neighbors of `node` as a contiguous slice — no heap allocation.
    ///
    /// Invalid IDs yield an empty slice, so a random-walk agent holding a
    /// stale reference simply stays put.
    #[inline]
    pub fn neighbors(&self, node: WaypointId) -> &[WaypointId] {
        let i = node.index();
        if i + 1 >= self.node_out_start.len() {
            return &[];
        }
        let start = self.node_out_start[i] as usize;
        let end = self.node_out_start[i + 1] as usize;
        &self.link_to[start..end]
    }

    /// Out-degree of `node` (0 for invalid IDs).
    #[inline]
    pub fn degree(&self, node: WaypointId) -> usize {
        self.neighbors(node).len()
    }
}

// ── WaypointGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WaypointGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// The builder accepts waypoints and links in any order.  `build()` sorts
/// links by source node and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use sn_core::Vec3;
/// use sn_world::WaypointGraphBuilder;
///
/// let mut b = WaypointGraphBuilder::new();
/// let hall = b.add_waypoint("hall", Vec3::new(0.0, 0.0, 0.0));
/// let door = b.add_waypoint("door", Vec3::new(4.0, 0.0, 0.0));
/// b.add_link(hall, door); // both directions
/// let g = b.build();
/// assert_eq!(g.neighbors(hall), &[door]);
/// assert_eq!(g.neighbors(door), &[hall]);
/// ```
pub struct WaypointGraphBuilder {
    nodes: Vec<(String, Vec3)>,
    raw_links: Vec<(WaypointId, WaypointId)>,
}

impl WaypointGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_links: Vec::new() }
    }

    /// Pre-allocate for the expected number of waypoints and links.
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            raw_links: Vec::with_capacity(links),
        }
    }

    /// Add a waypoint and return its `WaypointId` (sequential from 0).
    pub fn add_waypoint(&mut self, name: impl Into<String>, pos: Vec3) -> WaypointId {
        let id = WaypointId(self.nodes.len() as u32);
        self.nodes.push((name.into(), pos));
        id
    }

    /// Add a **directed** link from `from` to `to`.
    pub fn add_directed_link(&mut self, from: WaypointId, to: WaypointId) {
        self.raw_links.push((from, to));
    }

    /// Convenience: add links in **both directions** (the conventional case —
    /// patrol corridors are walkable both ways).
    pub fn add_link(&mut self, a: WaypointId, b: WaypointId) {
        self.add_directed_link(a, b);
        self.add_directed_link(b, a);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`WaypointGraph`].
    ///
    /// Time complexity: O(L log L) for the link sort, where L = links.
    pub fn build(self) -> WaypointGraph {
        let node_count = self.nodes.len();

        // Sort links by source node for CSR construction.  Stable sort keeps
        // each node's neighbors in insertion order, so walks are reproducible
        // for a given build sequence.
        let mut raw = self.raw_links;
        raw.sort_by_key(|&(from, _)| from.0);

        let link_to: Vec<WaypointId> = raw.iter().map(|&(_, to)| to).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, link_to.len());

        let (node_name, node_pos) = self.nodes.into_iter().unzip();

        WaypointGraph { node_pos, node_name, node_out_start, link_to }
    }
}

impl Default for WaypointGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
