//! Graph store: the single source of truth for accumulated nodes and edges.
//!
//! Merges are idempotent and strictly additive. Re-adding an existing node
//! id is a no-op (first write wins, fields are never overwritten), and an
//! edge whose endpoints are not both present is dropped with a log line
//! rather than raised as an error. No operation removes entities; the graph
//! is discarded wholesale when the session resets to a new anchor.

use cg_model::{EdgeId, ExpansionState, GraphEdge, GraphNode, NodeId};
use indexmap::IndexMap;

/// Counts reported by one merge call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Entities newly added
    pub added: usize,
    /// Entities skipped because their id already existed
    pub ignored: usize,
    /// Edges dropped because an endpoint was missing
    pub dropped: usize,
}

impl MergeOutcome {
    /// Whether the merge changed the store
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

/// Accumulated node and edge set for one exploration session
///
/// Insertion order is preserved, so iteration (and everything derived from
/// it, distances and projections included) is deterministic.
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, GraphNode>,
    edges: IndexMap<EdgeId, GraphEdge>,
}

impl GraphStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge nodes, first-write-wins per id
    pub fn merge_nodes(&mut self, nodes: Vec<GraphNode>) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        for node in nodes {
            if self.nodes.contains_key(&node.id) {
                outcome.ignored += 1;
            } else {
                self.nodes.insert(node.id.clone(), node);
                outcome.added += 1;
            }
        }
        outcome
    }

    /// Merge edges, first-write-wins per id
    ///
    /// An edge referencing a node the store does not hold is dropped and
    /// logged; this is defensive, never fatal.
    pub fn merge_edges(&mut self, edges: Vec<GraphEdge>) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        for edge in edges {
            if !self.nodes.contains_key(&edge.from) || !self.nodes.contains_key(&edge.to) {
                tracing::warn!(
                    edge = %edge.id,
                    from = %edge.from,
                    to = %edge.to,
                    "dropping edge with missing endpoint"
                );
                outcome.dropped += 1;
                continue;
            }
            if self.edges.contains_key(&edge.id) {
                outcome.ignored += 1;
            } else {
                self.edges.insert(edge.id.clone(), edge);
                outcome.added += 1;
            }
        }
        outcome
    }

    /// Number of edges already stored for the directed pair `(from, to)`
    ///
    /// Used as the sequence when deriving the id of the next parallel edge.
    #[must_use]
    pub fn parallel_edge_count(&self, from: &NodeId, to: &NodeId) -> usize {
        self.edges
            .values()
            .filter(|e| &e.from == from && &e.to == to)
            .count()
    }

    /// Flip a node's expansion state
    ///
    /// The only in-place node mutation the store allows. Returns `false`
    /// if the node does not exist.
    pub(crate) fn set_expansion_state(&mut self, id: &NodeId, state: ExpansionState) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.expansion_state = state;
                true
            }
            None => false,
        }
    }

    /// Look up a node
    #[inline]
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Look up an edge
    #[inline]
    #[must_use]
    pub fn edge(&self, id: &EdgeId) -> Option<&GraphEdge> {
        self.edges.get(id)
    }

    /// Whether a node id is present
    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Iterate edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.values()
    }

    /// Node count
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge count
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The node currently marked `Expanding`, if any
    #[must_use]
    pub fn expanding_node(&self) -> Option<&NodeId> {
        self.nodes
            .values()
            .find(|n| n.expansion_state.is_expanding())
            .map(|n| &n.id)
    }
}
