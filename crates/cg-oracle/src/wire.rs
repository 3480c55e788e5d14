//! Wire contract for the Concept Expansion Service.
//!
//! The service speaks camelCase JSON. Every response category is optional on
//! the wire; a missing or empty category yields zero new entities, which is
//! a legitimate terminal state rather than an error.

use serde::{Deserialize, Serialize};

/// Request to enrich the graph around one concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionRequest {
    /// Concept to expand (the node's label)
    pub concept_name: String,
    /// Free-text context, typically the anchor claim text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_context: Option<String>,
    /// Cap on corpus results per category
    pub max_source_results: u32,
    /// Whether to return counter-arguments
    pub include_counter_arguments: bool,
    /// Whether to return cross-domain connections
    pub include_cross_domain: bool,
}

impl ExpansionRequest {
    /// Request with default knobs for a concept name
    #[must_use]
    pub fn new(concept_name: impl Into<String>) -> Self {
        Self {
            concept_name: concept_name.into(),
            concept_context: None,
            max_source_results: 5,
            include_counter_arguments: true,
            include_cross_domain: true,
        }
    }

    /// With context text
    #[inline]
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.concept_context = Some(context.into());
        self
    }

    /// With result cap
    #[inline]
    #[must_use]
    pub fn with_max_source_results(mut self, max: u32) -> Self {
        self.max_source_results = max;
        self
    }
}

/// A concept related to the expanded one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedConcept {
    /// Concept name
    pub name: String,
    /// Concept category (snake_case spelling of the node kind)
    #[serde(rename = "type")]
    pub concept_type: String,
    /// Relationship from the expanded concept to this one
    pub relationship: String,
    /// Quote grounding the relationship
    #[serde(default)]
    pub evidence_quote: Option<String>,
    /// Corpus paper id
    pub paper_id: String,
    /// Corpus paper title
    pub paper_title: String,
    /// Section the evidence was taken from
    #[serde(default)]
    pub section: Option<String>,
    /// Confidence in [0, 1]
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// A corpus finding supporting the expanded concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingEvidence {
    /// Finding statement
    pub finding: String,
    /// Corpus paper id
    pub paper_id: String,
    /// Corpus paper title
    pub paper_title: String,
    /// Section the finding was taken from
    #[serde(default)]
    pub section: Option<String>,
    /// Direct quote
    #[serde(default)]
    pub quote: Option<String>,
}

/// A counter-argument against the expanded concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterArgument {
    /// Argument statement
    pub argument: String,
    /// Corpus paper id
    pub paper_id: String,
    /// Corpus paper title
    pub paper_title: String,
    /// Kind of limitation raised
    #[serde(default)]
    pub limitation_type: Option<String>,
}

/// A connection from the expanded concept into another domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossDomainConnection {
    /// Domain the connection reaches into
    pub domain: String,
    /// Concept on the other side
    pub concept: String,
    /// How the two connect
    pub connection: String,
    /// Corpus paper id
    pub paper_id: String,
    /// Quote grounding the connection
    #[serde(default)]
    pub evidence_quote: Option<String>,
}

/// Full oracle response for one expansion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionResponse {
    /// Related concepts
    #[serde(default)]
    pub related_concepts: Vec<RelatedConcept>,
    /// Supporting evidence
    #[serde(default)]
    pub supporting_evidence: Vec<SupportingEvidence>,
    /// Counter-arguments
    #[serde(default)]
    pub counter_arguments: Vec<CounterArgument>,
    /// Cross-domain connections
    #[serde(default)]
    pub cross_domain: Vec<CrossDomainConnection>,
    /// Free-text analysis notes
    #[serde(default)]
    pub analysis_notes: Option<String>,
}

impl ExpansionResponse {
    /// Whether every category came back empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.related_concepts.is_empty()
            && self.supporting_evidence.is_empty()
            && self.counter_arguments.is_empty()
            && self.cross_domain.is_empty()
    }

    /// Total number of entries across all categories
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.related_concepts.len()
            + self.supporting_evidence.len()
            + self.counter_arguments.len()
            + self.cross_domain.len()
    }
}
