//! Graph edge record.

use crate::id::{EdgeId, NodeId};
use crate::relationship::Relationship;
use serde::{Deserialize, Serialize};

/// A directed, typed connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Stable id derived from `(from, to, sequence)`
    pub id: EdgeId,
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
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

impl GraphEdge {
    /// Create the `sequence`-th parallel edge between two nodes
    ///
    /// The label defaults to the relationship's display form.
    #[must_use]
    pub fn new(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        relationship: Relationship,
        sequence: usize,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: EdgeId::derive(&from, &to, sequence),
            from,
            to,
            relationship,
            label: relationship.as_str().to_string(),
            evidence_quote: None,
            confidence: None,
            source_paper_id: None,
        }
    }

    /// With display label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// With evidence quote
    #[inline]
    #[must_use]
    pub fn with_evidence_quote(mut self, quote: impl Into<String>) -> Self {
        self.evidence_quote = Some(quote.into());
        self
    }

    /// With confidence, clamped to [0, 1]
    #[inline]
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// With source paper id
    #[inline]
    #[must_use]
    pub fn with_source_paper(mut self, paper_id: impl Into<String>) -> Self {
        self.source_paper_id = Some(paper_id.into());
        self
    }

    /// Whether the edge touches the given node on either end
    #[inline]
    #[must_use]
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.from == node || &self.to == node
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint
    #[must_use]
    pub fn other_endpoint(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.from == node {
            Some(&self.to)
        } else if &self.to == node {
            Some(&self.from)
        } else {
            None
        }
    }
}
