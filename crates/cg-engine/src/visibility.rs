//! Visibility filtering by hop distance.
//!
//! A pure projection: identical inputs always yield the identical visible
//! subset. The session recomputes this synchronously after every store
//! mutation, so downstream observers never see a visibility set computed
//! against a stale distance map.

use crate::distance::{DistanceMap, HopDistance};
use crate::store::GraphStore;
use cg_model::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// User-chosen depth threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLimit {
    /// Show nodes within this many hops of a seed
    Hops(u32),
    /// Show everything, disconnected components included
    Unbounded,
}

impl DepthLimit {
    /// Whether a node at the given distance is visible under this limit
    #[must_use]
    pub fn admits(&self, distance: HopDistance) -> bool {
        match (self, distance) {
            (Self::Unbounded, _) => true,
            (Self::Hops(_), HopDistance::Unreachable) => false,
            (Self::Hops(limit), HopDistance::Hops(hops)) => hops <= *limit,
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        Self::Hops(1)
    }
}

impl std::fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hops(h) => write!(f, "{h}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// The currently visible node/edge subset plus a hidden-node count
#[derive(Debug, Clone, Default)]
pub struct VisibleSubgraph {
    nodes: HashSet<NodeId>,
    edges: HashSet<EdgeId>,
    hidden_count: usize,
}

impl VisibleSubgraph {
    /// Whether a node is visible
    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Whether an edge is visible
    #[inline]
    #[must_use]
    pub fn contains_edge(&self, id: &EdgeId) -> bool {
        self.edges.contains(id)
    }

    /// Visible node count
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Visible edge count
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of nodes hidden by the current threshold
    #[inline]
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }
}

/// Compute the visible subgraph for a depth threshold.
///
/// A node is visible iff its distance is admitted by the limit; an edge is
/// visible iff both endpoints are.
#[must_use]
pub fn visible_subgraph(
    store: &GraphStore,
    distances: &DistanceMap,
    limit: DepthLimit,
) -> VisibleSubgraph {
    let mut nodes = HashSet::with_capacity(store.node_count());
    for node in store.nodes() {
        if limit.admits(distances.get(&node.id)) {
            nodes.insert(node.id.clone());
        }
    }

    let edges = store
        .edges()
        .filter(|e| nodes.contains(&e.from) && nodes.contains(&e.to))
        .map(|e| e.id.clone())
        .collect();

    let hidden_count = store.node_count() - nodes.len();
    VisibleSubgraph {
        nodes,
        edges,
        hidden_count,
    }
}
