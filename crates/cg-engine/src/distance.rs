//! Hop-distance calculation from the seed set.
//!
//! Multi-source breadth-first search over the stored graph, edges treated
//! as undirected. Every seed starts in the frontier at distance 0; a node
//! receives the first (hence minimum) distance at which it is dequeued and
//! is never re-enqueued, so the result is independent of iteration order.

use crate::store::GraphStore;
use cg_model::NodeId;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Distance from the nearest seed, in edge hops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HopDistance {
    /// Reachable in this many hops (0 for seeds)
    Hops(u32),
    /// No path to any seed
    Unreachable,
}

impl HopDistance {
    /// Finite hop count, if reachable
    #[inline]
    #[must_use]
    pub fn hops(&self) -> Option<u32> {
        match self {
            Self::Hops(h) => Some(*h),
            Self::Unreachable => None,
        }
    }
}

/// Distance assignment for every node in the store
///
/// Nodes absent from the map (a node merged after the last recompute, for
/// callers holding a stale map) report [`HopDistance::Unreachable`].
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: HashMap<NodeId, HopDistance>,
}

impl DistanceMap {
    /// Distance for one node
    #[inline]
    #[must_use]
    pub fn get(&self, id: &NodeId) -> HopDistance {
        self.distances
            .get(id)
            .copied()
            .unwrap_or(HopDistance::Unreachable)
    }

    /// Number of nodes covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the map covers no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterate over all assignments
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, HopDistance)> {
        self.distances.iter().map(|(id, d)| (id, *d))
    }
}

/// Compute hop distances from the seed set to every stored node.
///
/// With an empty seed set every node is assigned distance 0: the "no
/// anchor, show everything" default, deliberately distinct from every node
/// being unreachable.
#[must_use]
pub fn hop_distances(store: &GraphStore, seeds: &BTreeSet<NodeId>) -> DistanceMap {
    let mut distances: HashMap<NodeId, HopDistance> =
        HashMap::with_capacity(store.node_count());

    if seeds.is_empty() {
        for node in store.nodes() {
            distances.insert(node.id.clone(), HopDistance::Hops(0));
        }
        return DistanceMap { distances };
    }

    let mut adjacency: HashMap<&NodeId, Vec<&NodeId>> = HashMap::with_capacity(store.node_count());
    for edge in store.edges() {
        adjacency.entry(&edge.from).or_default().push(&edge.to);
        adjacency.entry(&edge.to).or_default().push(&edge.from);
    }

    let mut frontier: VecDeque<(&NodeId, u32)> = VecDeque::new();
    for seed in seeds {
        if store.contains_node(seed) && !distances.contains_key(seed) {
            distances.insert(seed.clone(), HopDistance::Hops(0));
            frontier.push_back((seed, 0));
        }
    }

    while let Some((current, depth)) = frontier.pop_front() {
        if let Some(neighbors) = adjacency.get(current) {
            for &neighbor in neighbors {
                if !distances.contains_key(neighbor) {
                    distances.insert(neighbor.clone(), HopDistance::Hops(depth + 1));
                    frontier.push_back((neighbor, depth + 1));
                }
            }
        }
    }

    for node in store.nodes() {
        distances
            .entry(node.id.clone())
            .or_insert(HopDistance::Unreachable);
    }

    DistanceMap { distances }
}
