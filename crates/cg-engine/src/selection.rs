//! Selection tracking and inspector payloads.
//!
//! At most one node or one edge is inspected at a time; activating one kind
//! clears the other.

use crate::store::GraphStore;
use cg_model::{ClaimRole, EdgeId, NodeId, NodeKind, PaperReference, Relationship};
use serde::{Deserialize, Serialize};

/// The currently inspected entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Nothing inspected
    #[default]
    None,
    /// A node is inspected
    Node(NodeId),
    /// An edge is inspected
    Edge(EdgeId),
}

impl Selection {
    /// Selected node id, if a node is inspected
    #[must_use]
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    /// Selected edge id, if an edge is inspected
    #[must_use]
    pub fn edge(&self) -> Option<&EdgeId> {
        match self {
            Self::Edge(id) => Some(id),
            _ => None,
        }
    }
}

/// Mutually-exclusive node/edge selection holder
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    current: Selection,
}

impl SelectionManager {
    /// Create with nothing selected
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a node, clearing any edge selection
    #[inline]
    pub fn select_node(&mut self, id: NodeId) {
        self.current = Selection::Node(id);
    }

    /// Select an edge, clearing any node selection
    #[inline]
    pub fn select_edge(&mut self, id: EdgeId) {
        self.current = Selection::Edge(id);
    }

    /// Clear the selection
    #[inline]
    pub fn clear(&mut self) {
        self.current = Selection::None;
    }

    /// Current selection
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Selection {
        &self.current
    }
}

/// Inspector payload for a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeInspector {
    /// Node id
    pub id: NodeId,
    /// Display name
    pub label: String,
    /// Semantic category
    pub kind: NodeKind,
    /// Longer description
    pub description: Option<String>,
    /// Why the node is relevant
    pub relevance_note: Option<String>,
    /// Role relative to the anchor claim
    pub claim_role: Option<ClaimRole>,
    /// Confidence in [0, 1]
    pub confidence: Option<f64>,
    /// Corpus references
    pub paper_references: Vec<PaperReference>,
    /// Whether an expansion can be requested right now
    pub can_expand: bool,
}

impl NodeInspector {
    /// Build the payload for a stored node
    ///
    /// `expansion_in_flight` is the session-global single-flight flag; while
    /// any node is expanding, no node offers expansion.
    #[must_use]
    pub fn build(store: &GraphStore, id: &NodeId, expansion_in_flight: bool) -> Option<Self> {
        let node = store.node(id)?;
        Some(Self {
            id: node.id.clone(),
            label: node.label.clone(),
            kind: node.kind,
            description: node.description.clone(),
            relevance_note: node.relevance_note.clone(),
            claim_role: node.claim_role,
            confidence: node.confidence,
            paper_references: node.paper_references.clone(),
            can_expand: node.expansion_state.is_collapsed() && !expansion_in_flight,
        })
    }
}

/// Inspector payload for an edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeInspector {
    /// Edge id
    pub id: EdgeId,
    /// Label of the source node
    pub from_label: String,
    /// Label of the target node
    pub to_label: String,
    /// Semantic relationship
    pub relationship: Relationship,
    /// Display label
    pub label: String,
    /// Quote grounding the relationship
    pub evidence_quote: Option<String>,
    /// Confidence in [0, 1]
    pub confidence: Option<f64>,
    /// Paper the relationship was extracted from
    pub source_paper_id: Option<String>,
}

impl EdgeInspector {
    /// Build the payload for a stored edge
    #[must_use]
    pub fn build(store: &GraphStore, id: &EdgeId) -> Option<Self> {
        let edge = store.edge(id)?;
        let from = store.node(&edge.from)?;
        let to = store.node(&edge.to)?;
        Some(Self {
            id: edge.id.clone(),
            from_label: from.label.clone(),
            to_label: to.label.clone(),
            relationship: edge.relationship,
            label: edge.label.clone(),
            evidence_quote: edge.evidence_quote.clone(),
            confidence: edge.confidence,
            source_paper_id: edge.source_paper_id.clone(),
        })
    }
}
