//! Graph node record.

use crate::id::NodeId;
use crate::kind::{ClaimRole, ExpansionState, NodeKind};
use serde::{Deserialize, Serialize};

/// Reference into the document corpus backing a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperReference {
    /// Corpus paper identifier
    pub paper_id: String,
    /// Paper title
    pub title: String,
    /// Quoted excerpt grounding the node
    pub excerpt: String,
    /// Section the excerpt was taken from
    pub section: Option<String>,
}

impl PaperReference {
    /// Create a reference without a section
    #[inline]
    #[must_use]
    pub fn new(
        paper_id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            paper_id: paper_id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            section: None,
        }
    }

    /// With section
    #[inline]
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// A concept-graph node
///
/// Whether a node is a seed is derived from the session's matched-entity
/// input at projection time and intentionally not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Stable id, unique per session
    pub id: NodeId,
    /// Display name
    pub label: String,
    /// Semantic category
    pub kind: NodeKind,
    /// Longer description
    pub description: Option<String>,
    /// Ordered corpus references
    pub paper_references: Vec<PaperReference>,
    /// Expansion lifecycle state
    pub expansion_state: ExpansionState,
    /// Whether the caller flagged this node as a direct match for the anchor
    pub is_direct_match: bool,
    /// Free-text note on why the node is relevant
    pub relevance_note: Option<String>,
    /// Role relative to the anchor claim
    pub claim_role: Option<ClaimRole>,
    /// Confidence in [0, 1]
    pub confidence: Option<f64>,
}

impl GraphNode {
    /// Create a collapsed node with the required fields
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            description: None,
            paper_references: Vec::new(),
            expansion_state: ExpansionState::Collapsed,
            is_direct_match: false,
            relevance_note: None,
            claim_role: None,
            confidence: None,
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With an appended paper reference
    #[inline]
    #[must_use]
    pub fn with_paper(mut self, paper: PaperReference) -> Self {
        self.paper_references.push(paper);
        self
    }

    /// Flag as a direct match for the anchor
    #[inline]
    #[must_use]
    pub fn direct_match(mut self) -> Self {
        self.is_direct_match = true;
        self
    }

    /// With relevance note
    #[inline]
    #[must_use]
    pub fn with_relevance_note(mut self, note: impl Into<String>) -> Self {
        self.relevance_note = Some(note.into());
        self
    }

    /// With claim role
    #[inline]
    #[must_use]
    pub fn with_claim_role(mut self, role: ClaimRole) -> Self {
        self.claim_role = Some(role);
        self
    }

    /// With confidence, clamped to [0, 1]
    #[inline]
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_builder_defaults() {
        let node = GraphNode::new("gap_junction", "Gap junction", NodeKind::Concept);
        assert_eq!(node.id, NodeId::new("gap_junction"));
        assert_eq!(node.expansion_state, ExpansionState::Collapsed);
        assert!(!node.is_direct_match);
        assert!(node.paper_references.is_empty());
        assert!(node.confidence.is_none());
    }

    #[test]
    fn node_builder_optional_fields() {
        let node = GraphNode::new("cx43", "Connexin 43", NodeKind::Gene)
            .with_description("Gap junction protein")
            .with_paper(PaperReference::new("p1", "Paper one", "an excerpt").with_section("Results"))
            .direct_match()
            .with_claim_role(ClaimRole::Mechanism)
            .with_confidence(0.8);

        assert!(node.is_direct_match);
        assert_eq!(node.paper_references.len(), 1);
        assert_eq!(node.paper_references[0].section.as_deref(), Some("Results"));
        assert_eq!(node.claim_role, Some(ClaimRole::Mechanism));
        assert_eq!(node.confidence, Some(0.8));
    }

    #[test]
    fn node_confidence_is_clamped() {
        let node = GraphNode::new("n", "n", NodeKind::Concept).with_confidence(1.7);
        assert_eq!(node.confidence, Some(1.0));

        let node = GraphNode::new("n", "n", NodeKind::Concept).with_confidence(-0.3);
        assert_eq!(node.confidence, Some(0.0));
    }
}
