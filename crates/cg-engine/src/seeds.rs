//! Seed resolution from caller-supplied matched entities.
//!
//! The caller hands the session a list of matched-entity identifiers; which
//! nodes those identify is decided by an ordered pipeline of resolver
//! strategies, tried in sequence and stopped at the first non-empty result.
//! If nothing resolves the seed set is empty, which downstream means "no
//! anchor, show everything" rather than a failure.

use crate::store::GraphStore;
use cg_model::NodeId;
use std::collections::BTreeSet;

/// One strategy for mapping matched identifiers onto stored nodes
pub trait SeedResolver: Send + Sync + std::fmt::Debug {
    /// Strategy name (for logging)
    fn name(&self) -> &'static str;

    /// Nodes this strategy resolves from the matched identifiers
    fn resolve(&self, store: &GraphStore, matched: &[String]) -> BTreeSet<NodeId>;
}

/// Identifiers that are themselves node ids
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactIdResolver;

impl SeedResolver for ExactIdResolver {
    fn name(&self) -> &'static str {
        "exact_id"
    }

    fn resolve(&self, store: &GraphStore, matched: &[String]) -> BTreeSet<NodeId> {
        matched
            .iter()
            .map(|m| NodeId::new(m.clone()))
            .filter(|id| store.contains_node(id))
            .collect()
    }
}

/// Nodes the caller flagged as direct matches for the anchor
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectMatchResolver;

impl SeedResolver for DirectMatchResolver {
    fn name(&self) -> &'static str {
        "direct_match"
    }

    fn resolve(&self, store: &GraphStore, _matched: &[String]) -> BTreeSet<NodeId> {
        store
            .nodes()
            .filter(|n| n.is_direct_match)
            .map(|n| n.id.clone())
            .collect()
    }
}

/// Case-insensitive label equality against the identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelResolver;

impl SeedResolver for LabelResolver {
    fn name(&self) -> &'static str {
        "label"
    }

    fn resolve(&self, store: &GraphStore, matched: &[String]) -> BTreeSet<NodeId> {
        let lowered: Vec<String> = matched.iter().map(|m| m.to_lowercase()).collect();
        store
            .nodes()
            .filter(|n| lowered.iter().any(|m| n.label.to_lowercase() == *m))
            .map(|n| n.id.clone())
            .collect()
    }
}

/// Ordered resolver pipeline
#[derive(Debug)]
pub struct SeedResolution {
    resolvers: Vec<Box<dyn SeedResolver>>,
}

impl SeedResolution {
    /// Pipeline with the standard strategies: exact id, then direct-match
    /// flag, then case-insensitive label
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            resolvers: vec![
                Box::new(ExactIdResolver),
                Box::new(DirectMatchResolver),
                Box::new(LabelResolver),
            ],
        }
    }

    /// Pipeline with custom strategies
    #[must_use]
    pub fn new(resolvers: Vec<Box<dyn SeedResolver>>) -> Self {
        Self { resolvers }
    }

    /// Resolve the seed set: first strategy with a non-empty result wins
    #[must_use]
    pub fn resolve(&self, store: &GraphStore, matched: &[String]) -> BTreeSet<NodeId> {
        if matched.is_empty() {
            return BTreeSet::new();
        }

        for resolver in &self.resolvers {
            let seeds = resolver.resolve(store, matched);
            if !seeds.is_empty() {
                tracing::debug!(
                    resolver = resolver.name(),
                    count = seeds.len(),
                    "seed set resolved"
                );
                return seeds;
            }
        }

        tracing::debug!(identifiers = matched.len(), "no seeds resolved");
        BTreeSet::new()
    }
}

impl Default for SeedResolution {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_model::{GraphNode, NodeKind};

    fn store() -> GraphStore {
        let mut store = GraphStore::new();
        store.merge_nodes(vec![
            GraphNode::new("bioelectric_signaling", "Bioelectric Signaling", NodeKind::Concept),
            GraphNode::new("gap_junction", "Gap Junction", NodeKind::Concept).direct_match(),
            GraphNode::new("cx43", "Connexin 43", NodeKind::Gene),
        ]);
        store
    }

    fn matched(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn exact_id_wins_first() {
        let pipeline = SeedResolution::with_defaults();
        let seeds = pipeline.resolve(&store(), &matched(&["bioelectric_signaling"]));

        assert_eq!(seeds.len(), 1);
        assert!(seeds.contains(&"bioelectric_signaling".into()));
    }

    #[test]
    fn direct_match_fallback_when_no_id_matches() {
        let pipeline = SeedResolution::with_defaults();
        let seeds = pipeline.resolve(&store(), &matched(&["nonexistent_id"]));

        assert_eq!(seeds.len(), 1);
        assert!(seeds.contains(&"gap_junction".into()));
    }

    #[test]
    fn label_fallback_is_case_insensitive() {
        let mut store = store();
        // Remove the direct-match shortcut by building a store without it
        store = {
            let mut s = GraphStore::new();
            s.merge_nodes(store.nodes().cloned().map(|mut n| {
                n.is_direct_match = false;
                n
            }).collect());
            s
        };

        let pipeline = SeedResolution::with_defaults();
        let seeds = pipeline.resolve(&store, &matched(&["CONNEXIN 43"]));

        assert_eq!(seeds.len(), 1);
        assert!(seeds.contains(&"cx43".into()));
    }

    #[test]
    fn unresolvable_identifiers_degrade_to_empty() {
        let mut plain = GraphStore::new();
        plain.merge_nodes(vec![GraphNode::new("a", "a", NodeKind::Concept)]);

        let pipeline = SeedResolution::with_defaults();
        let seeds = pipeline.resolve(&plain, &matched(&["ghost"]));
        assert!(seeds.is_empty());
    }

    #[test]
    fn empty_matched_list_short_circuits() {
        let pipeline = SeedResolution::with_defaults();
        // direct-match flagged node exists, but with no caller input there
        // is no anchor to resolve against
        let seeds = pipeline.resolve(&store(), &[]);
        assert!(seeds.is_empty());
    }

    #[test]
    fn multiple_identifiers_union_within_one_strategy() {
        let pipeline = SeedResolution::with_defaults();
        let seeds = pipeline.resolve(&store(), &matched(&["bioelectric_signaling", "cx43"]));

        assert_eq!(seeds.len(), 2);
    }
}
