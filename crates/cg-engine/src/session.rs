//! The exploration session: single owner of all concept-graph state.
//!
//! Every mutation funnels through this type — bootstrap/reset, merges,
//! depth changes, selection, expansion — and each mutating call finishes
//! with one synchronous recompute batch (seed resolution, hop distances,
//! visibility), so no observer ever sees a visibility set computed against
//! a stale distance map.
//!
//! State lives behind an async mutex. The one suspension point is the
//! oracle call inside [`ConceptGraphSession::expand`], which is awaited
//! without holding the lock: selection, depth changes, and inspection stay
//! responsive while an expansion is pending.

use crate::config::SessionConfig;
use crate::distance::{hop_distances, DistanceMap};
use crate::seeds::SeedResolution;
use crate::selection::{EdgeInspector, NodeInspector, Selection, SelectionManager};
use crate::store::{GraphStore, MergeOutcome};
use crate::translate::translate_response;
use crate::visibility::{visible_subgraph, DepthLimit, VisibleSubgraph};
use cg_model::{EdgeId, ExpansionState, GraphEdge, GraphNode, NodeId};
use cg_oracle::{ConceptExpansionOracle, ExpansionRequest};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Initial (or replacement) graph for one anchor claim
#[derive(Debug, Clone, Default)]
pub struct BootstrapGraph {
    /// Initial nodes
    pub nodes: Vec<GraphNode>,
    /// Initial edges
    pub edges: Vec<GraphEdge>,
    /// Matched-entity identifiers the seed set resolves from
    pub matched_entities: Vec<String>,
    /// Free-text context sent with every expansion, typically the claim text
    pub anchor_context: Option<String>,
    /// Starting depth threshold; falls back to the session default
    pub depth: Option<DepthLimit>,
}

impl BootstrapGraph {
    /// Bootstrap with nodes and edges only
    #[must_use]
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self {
            nodes,
            edges,
            matched_entities: Vec::new(),
            anchor_context: None,
            depth: None,
        }
    }

    /// With matched-entity identifiers
    #[inline]
    #[must_use]
    pub fn with_matched_entities(mut self, matched: Vec<String>) -> Self {
        self.matched_entities = matched;
        self
    }

    /// With anchor context text
    #[inline]
    #[must_use]
    pub fn with_anchor_context(mut self, context: impl Into<String>) -> Self {
        self.anchor_context = Some(context.into());
        self
    }

    /// With starting depth
    #[inline]
    #[must_use]
    pub fn with_depth(mut self, depth: DepthLimit) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// Outcome of one expansion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// Oracle answered and the graph was enriched (possibly by nothing,
    /// when every category came back empty)
    Expanded {
        /// Nodes newly added
        added_nodes: usize,
        /// Edges newly added
        added_edges: usize,
    },
    /// Precondition not met: unknown node, not collapsed, or another
    /// expansion in flight
    Ignored,
    /// Oracle failed; the node is collapsed again and retryable
    Failed {
        /// Human-readable message, also recorded against the node
        message: String,
    },
    /// The session was reset while the request was in flight; the
    /// response was discarded
    Stale,
}

/// Read-only, render-neutral snapshot handed to the visualization surface
#[derive(Debug, Clone, Serialize)]
pub struct GraphProjection {
    /// Visible nodes, in insertion order
    pub visible_nodes: Vec<GraphNode>,
    /// Visible edges, in insertion order
    pub visible_edges: Vec<GraphEdge>,
    /// Nodes hidden by the current depth threshold
    pub hidden_count: usize,
    /// Current seed set
    pub seed_ids: Vec<NodeId>,
    /// Node currently expanding, if any
    pub expanding: Option<NodeId>,
    /// Current depth threshold
    pub depth: DepthLimit,
}

impl GraphProjection {
    /// Whether a node is a seed in this snapshot
    #[must_use]
    pub fn is_seed(&self, id: &NodeId) -> bool {
        self.seed_ids.contains(id)
    }
}

/// All mutable state for one exploration session
#[derive(Debug, Default)]
struct SessionState {
    store: GraphStore,
    matched_entities: Vec<String>,
    anchor_context: Option<String>,
    depth: DepthLimit,
    seeds: BTreeSet<NodeId>,
    distances: DistanceMap,
    visible: VisibleSubgraph,
    selection: SelectionManager,
    expanding: Option<NodeId>,
    expansion_errors: HashMap<NodeId, String>,
    epoch: u64,
}

impl SessionState {
    /// One atomic recompute batch: seeds, then distances, then visibility
    fn recompute(&mut self, resolvers: &SeedResolution) {
        self.seeds = resolvers.resolve(&self.store, &self.matched_entities);
        self.distances = hop_distances(&self.store, &self.seeds);
        self.visible = visible_subgraph(&self.store, &self.distances, self.depth);
        tracing::debug!(
            nodes = self.store.node_count(),
            edges = self.store.edge_count(),
            seeds = self.seeds.len(),
            visible = self.visible.node_count(),
            hidden = self.visible.hidden_count(),
            "recomputed distances and visibility"
        );
    }
}

/// One exploration session over a concept graph
///
/// Created per anchor claim; [`reset`](Self::reset) discards everything and
/// starts over for a new anchor. The oracle is shared and called at most
/// once concurrently (global single-flight expansion).
pub struct ConceptGraphSession {
    state: Mutex<SessionState>,
    oracle: Arc<dyn ConceptExpansionOracle>,
    resolvers: SeedResolution,
    config: SessionConfig,
}

impl std::fmt::Debug for ConceptGraphSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptGraphSession")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ConceptGraphSession {
    /// Create an empty session against an oracle
    #[must_use]
    pub fn new(oracle: Arc<dyn ConceptExpansionOracle>, config: SessionConfig) -> Self {
        let state = SessionState {
            depth: config.default_depth,
            ..SessionState::default()
        };
        Self {
            state: Mutex::new(state),
            oracle,
            resolvers: SeedResolution::with_defaults(),
            config,
        }
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Install the initial graph for an anchor claim
    pub async fn bootstrap(&self, bootstrap: BootstrapGraph) {
        self.reset(bootstrap).await;
    }

    /// Replace all state with a new anchor's graph
    ///
    /// Discards nodes, edges, selection, and recorded errors wholesale. Any
    /// expansion response still in flight for the previous anchor is
    /// discarded when it arrives.
    pub async fn reset(&self, bootstrap: BootstrapGraph) {
        let mut state = self.state.lock().await;
        state.epoch += 1;
        state.store = GraphStore::new();
        state.selection.clear();
        state.expansion_errors.clear();
        state.expanding = None;
        state.matched_entities = bootstrap.matched_entities;
        state.anchor_context = bootstrap.anchor_context;
        state.depth = bootstrap.depth.unwrap_or(self.config.default_depth);

        let nodes = state.store.merge_nodes(bootstrap.nodes);
        let edges = state.store.merge_edges(bootstrap.edges);
        state.recompute(&self.resolvers);

        tracing::info!(
            epoch = state.epoch,
            nodes = nodes.added,
            edges = edges.added,
            dropped_edges = edges.dropped,
            "session reset to new anchor"
        );
    }

    /// Merge nodes into the store (idempotent, additive)
    pub async fn merge_nodes(&self, nodes: Vec<GraphNode>) -> MergeOutcome {
        let mut state = self.state.lock().await;
        let outcome = state.store.merge_nodes(nodes);
        if outcome.changed() {
            state.recompute(&self.resolvers);
        }
        outcome
    }

    /// Merge edges into the store (idempotent, additive)
    pub async fn merge_edges(&self, edges: Vec<GraphEdge>) -> MergeOutcome {
        let mut state = self.state.lock().await;
        let outcome = state.store.merge_edges(edges);
        if outcome.changed() {
            state.recompute(&self.resolvers);
        }
        outcome
    }

    /// Replace the matched-entity identifiers the seed set resolves from
    pub async fn set_matched_entities(&self, matched: Vec<String>) {
        let mut state = self.state.lock().await;
        state.matched_entities = matched;
        state.recompute(&self.resolvers);
    }

    /// Change the depth threshold
    pub async fn set_depth(&self, depth: DepthLimit) {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        state.depth = depth;
        // seeds and distances are unaffected; only visibility changes
        state.visible = visible_subgraph(&state.store, &state.distances, depth);
    }

    /// Current depth threshold
    pub async fn depth(&self) -> DepthLimit {
        self.state.lock().await.depth
    }

    /// Inspect a node, clearing any edge selection
    ///
    /// Ids that do not exist are ignored.
    pub async fn select_node(&self, id: &NodeId) {
        let mut state = self.state.lock().await;
        if state.store.contains_node(id) {
            state.selection.select_node(id.clone());
        } else {
            tracing::debug!(node = %id, "ignoring selection of unknown node");
        }
    }

    /// Inspect an edge, clearing any node selection
    ///
    /// Ids that do not exist are ignored.
    pub async fn select_edge(&self, id: &EdgeId) {
        let mut state = self.state.lock().await;
        if state.store.edge(id).is_some() {
            state.selection.select_edge(id.clone());
        } else {
            tracing::debug!(edge = %id, "ignoring selection of unknown edge");
        }
    }

    /// Clear the selection
    pub async fn clear_selection(&self) {
        self.state.lock().await.selection.clear();
    }

    /// Current selection
    pub async fn selection(&self) -> Selection {
        self.state.lock().await.selection.current().clone()
    }

    /// Inspector payload for a node
    pub async fn node_inspector(&self, id: &NodeId) -> Option<NodeInspector> {
        let state = self.state.lock().await;
        NodeInspector::build(&state.store, id, state.expanding.is_some())
    }

    /// Inspector payload for an edge
    pub async fn edge_inspector(&self, id: &EdgeId) -> Option<EdgeInspector> {
        let state = self.state.lock().await;
        EdgeInspector::build(&state.store, id)
    }

    /// Error recorded against a node by its last failed expansion
    pub async fn expansion_error(&self, id: &NodeId) -> Option<String> {
        self.state.lock().await.expansion_errors.get(id).cloned()
    }

    /// Read-only snapshot for the rendering surface
    pub async fn projection(&self) -> GraphProjection {
        let state = self.state.lock().await;
        let visible_nodes = state
            .store
            .nodes()
            .filter(|n| state.visible.contains_node(&n.id))
            .cloned()
            .collect();
        let visible_edges = state
            .store
            .edges()
            .filter(|e| state.visible.contains_edge(&e.id))
            .cloned()
            .collect();
        GraphProjection {
            visible_nodes,
            visible_edges,
            hidden_count: state.visible.hidden_count(),
            seed_ids: state.seeds.iter().cloned().collect(),
            expanding: state.expanding.clone(),
            depth: state.depth,
        }
    }

    /// Grow the graph around one collapsed node
    ///
    /// Silent no-op when the node is unknown, not collapsed, or another
    /// expansion is already in flight (one expansion at a time, globally).
    /// On failure the node reverts to collapsed and the error message is
    /// recorded for [`expansion_error`](Self::expansion_error).
    pub async fn expand(&self, id: &NodeId) -> ExpandOutcome {
        let (epoch, request) = {
            let mut state = self.state.lock().await;

            if let Some(in_flight) = &state.expanding {
                tracing::debug!(node = %id, in_flight = %in_flight, "expansion already in flight");
                return ExpandOutcome::Ignored;
            }
            let label = match state.store.node(id) {
                Some(node) if node.expansion_state.is_collapsed() => node.label.clone(),
                Some(node) => {
                    tracing::debug!(node = %id, state = ?node.expansion_state, "node not expandable");
                    return ExpandOutcome::Ignored;
                }
                None => {
                    tracing::debug!(node = %id, "cannot expand unknown node");
                    return ExpandOutcome::Ignored;
                }
            };

            state.store.set_expansion_state(id, ExpansionState::Expanding);
            state.expanding = Some(id.clone());

            let mut request = ExpansionRequest::new(label)
                .with_max_source_results(self.config.max_source_results);
            request.include_counter_arguments = self.config.include_counter_arguments;
            request.include_cross_domain = self.config.include_cross_domain;
            if let Some(context) = &state.anchor_context {
                request = request.with_context(context.clone());
            }
            (state.epoch, request)
        };

        tracing::info!(node = %id, "expansion started");
        let result = self.oracle.expand(&request).await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            tracing::warn!(node = %id, "discarding expansion response from a previous anchor");
            return ExpandOutcome::Stale;
        }

        match result {
            Ok(response) => {
                let translated = translate_response(id, &response, &state.store);
                let nodes = state.store.merge_nodes(translated.nodes);
                let edges = state.store.merge_edges(translated.edges);
                state.store.set_expansion_state(id, ExpansionState::Expanded);
                state.expansion_errors.remove(id);
                state.expanding = None;
                state.recompute(&self.resolvers);

                tracing::info!(
                    node = %id,
                    added_nodes = nodes.added,
                    added_edges = edges.added,
                    dropped_edges = edges.dropped,
                    "expansion merged"
                );
                ExpandOutcome::Expanded {
                    added_nodes: nodes.added,
                    added_edges: edges.added,
                }
            }
            Err(err) => {
                state.store.set_expansion_state(id, ExpansionState::Collapsed);
                state.expanding = None;
                let message = err.user_message();
                state.expansion_errors.insert(id.clone(), message.clone());

                tracing::warn!(node = %id, error = %err, "expansion failed");
                ExpandOutcome::Failed { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cg_model::NodeKind;
    use cg_oracle::{ExpansionResponse, OracleError};

    #[derive(Debug)]
    struct StaticOracle(ExpansionResponse);

    #[async_trait]
    impl ConceptExpansionOracle for StaticOracle {
        async fn expand(
            &self,
            _request: &ExpansionRequest,
        ) -> Result<ExpansionResponse, OracleError> {
            Ok(self.0.clone())
        }
    }

    fn session() -> ConceptGraphSession {
        ConceptGraphSession::new(
            Arc::new(StaticOracle(ExpansionResponse::default())),
            SessionConfig::default(),
        )
    }

    fn bootstrap() -> BootstrapGraph {
        BootstrapGraph::new(
            vec![
                GraphNode::new("bioelectric_signaling", "Bioelectric Signaling", NodeKind::Concept),
                GraphNode::new("gap_junction", "Gap Junction", NodeKind::Concept),
            ],
            vec![GraphEdge::new(
                "bioelectric_signaling",
                "gap_junction",
                cg_model::Relationship::Enables,
                0,
            )],
        )
        .with_matched_entities(vec!["bioelectric_signaling".to_string()])
        .with_anchor_context("Bioelectric signaling enables regeneration")
        .with_depth(DepthLimit::Hops(0))
    }

    #[tokio::test]
    async fn bootstrap_depth_zero_shows_only_seed() {
        let session = session();
        session.bootstrap(bootstrap()).await;

        let projection = session.projection().await;
        assert_eq!(projection.visible_nodes.len(), 1);
        assert_eq!(projection.visible_nodes[0].id.as_str(), "bioelectric_signaling");
        assert!(projection.visible_edges.is_empty());
        assert_eq!(projection.hidden_count, 1);
        assert!(projection.is_seed(&"bioelectric_signaling".into()));
    }

    #[tokio::test]
    async fn depth_one_reveals_neighbor_and_edge() {
        let session = session();
        session.bootstrap(bootstrap()).await;
        session.set_depth(DepthLimit::Hops(1)).await;

        let projection = session.projection().await;
        assert_eq!(projection.visible_nodes.len(), 2);
        assert_eq!(projection.visible_edges.len(), 1);
        assert_eq!(projection.hidden_count, 0);
    }

    #[tokio::test]
    async fn reset_discards_previous_graph() {
        let session = session();
        session.bootstrap(bootstrap()).await;
        session.select_node(&"gap_junction".into()).await;

        session
            .reset(BootstrapGraph::new(
                vec![GraphNode::new("fresh", "Fresh", NodeKind::Concept)],
                vec![],
            ))
            .await;

        let projection = session.projection().await;
        assert_eq!(projection.visible_nodes.len(), 1);
        assert_eq!(projection.visible_nodes[0].id.as_str(), "fresh");
        assert_eq!(session.selection().await, Selection::None);
    }

    #[tokio::test]
    async fn selection_ignores_unknown_ids() {
        let session = session();
        session.bootstrap(bootstrap()).await;

        session.select_node(&"ghost".into()).await;
        assert_eq!(session.selection().await, Selection::None);
    }

    #[tokio::test]
    async fn matched_entity_update_recomputes_seeds() {
        let session = session();
        session.bootstrap(bootstrap()).await;

        session
            .set_matched_entities(vec!["gap_junction".to_string()])
            .await;

        let projection = session.projection().await;
        assert!(projection.is_seed(&"gap_junction".into()));
        assert!(!projection.is_seed(&"bioelectric_signaling".into()));
    }

    #[tokio::test]
    async fn empty_matched_entities_show_everything_at_depth_zero() {
        let session = session();
        let mut graph = bootstrap();
        graph.matched_entities.clear();
        session.bootstrap(graph).await;

        let projection = session.projection().await;
        assert_eq!(projection.visible_nodes.len(), 2);
        assert!(projection.seed_ids.is_empty());
    }
}
