//! Translation of oracle responses into graph entities.
//!
//! Each response entry becomes one new node plus one new edge attached to
//! the expanded node. Direction and relationship encode the category:
//! related concepts point outward with the oracle-supplied relationship,
//! evidence points `supports` toward the expanded node, counter-arguments
//! point `contradicts` toward it, and cross-domain connections point
//! `extends` outward. Node ids are slugs of the entity name, so the same
//! entity surfaced twice merges into one node downstream.

use crate::store::GraphStore;
use cg_model::{
    slugify, GraphEdge, GraphNode, NodeId, NodeKind, PaperReference, Relationship,
};
use cg_oracle::ExpansionResponse;
use std::collections::HashMap;

/// Entities produced by translating one oracle response
#[derive(Debug, Default)]
pub struct TranslatedExpansion {
    /// New nodes (may duplicate existing ids; the store merge dedups)
    pub nodes: Vec<GraphNode>,
    /// New edges attached to the expanded node
    pub edges: Vec<GraphEdge>,
}

/// Sequence allocator for parallel edges, seeded from the store
struct EdgeSequencer<'a> {
    store: &'a GraphStore,
    allocated: HashMap<(NodeId, NodeId), usize>,
}

impl<'a> EdgeSequencer<'a> {
    fn new(store: &'a GraphStore) -> Self {
        Self {
            store,
            allocated: HashMap::new(),
        }
    }

    fn next(&mut self, from: &NodeId, to: &NodeId) -> usize {
        let key = (from.clone(), to.clone());
        let base = self.store.parallel_edge_count(from, to);
        let offset = self.allocated.entry(key).or_insert(0);
        let sequence = base + *offset;
        *offset += 1;
        sequence
    }
}

/// Translate an oracle response into nodes and edges around `expanded`.
///
/// Entries whose name slugs to nothing are skipped; unknown concept kinds
/// fall back to `concept` and unknown relationships to `correlates_with`.
#[must_use]
pub fn translate_response(
    expanded: &NodeId,
    response: &ExpansionResponse,
    store: &GraphStore,
) -> TranslatedExpansion {
    let mut out = TranslatedExpansion::default();
    let mut sequencer = EdgeSequencer::new(store);

    for related in &response.related_concepts {
        let slug = slugify(&related.name);
        if slug.is_empty() {
            tracing::debug!(name = %related.name, "skipping related concept with empty slug");
            continue;
        }
        let id = NodeId::new(slug);

        let kind = related
            .concept_type
            .parse::<NodeKind>()
            .unwrap_or(NodeKind::Concept);
        let mut reference = PaperReference::new(
            related.paper_id.clone(),
            related.paper_title.clone(),
            related.evidence_quote.clone().unwrap_or_default(),
        );
        reference.section = related.section.clone();
        let mut node = GraphNode::new(id.clone(), related.name.clone(), kind).with_paper(reference);
        if let Some(confidence) = related.confidence {
            node = node.with_confidence(confidence);
        }
        out.nodes.push(node);

        let relationship = related
            .relationship
            .parse::<Relationship>()
            .unwrap_or(Relationship::CorrelatesWith);
        let sequence = sequencer.next(expanded, &id);
        let mut edge = GraphEdge::new(expanded.clone(), id, relationship, sequence)
            .with_label(related.relationship.clone())
            .with_source_paper(related.paper_id.clone());
        if let Some(quote) = &related.evidence_quote {
            edge = edge.with_evidence_quote(quote.clone());
        }
        if let Some(confidence) = related.confidence {
            edge = edge.with_confidence(confidence);
        }
        out.edges.push(edge);
    }

    for evidence in &response.supporting_evidence {
        let slug = slugify(&evidence.finding);
        if slug.is_empty() {
            tracing::debug!("skipping evidence with empty slug");
            continue;
        }
        let id = NodeId::new(slug);

        let mut reference = PaperReference::new(
            evidence.paper_id.clone(),
            evidence.paper_title.clone(),
            evidence.quote.clone().unwrap_or_default(),
        );
        reference.section = evidence.section.clone();
        out.nodes.push(
            GraphNode::new(id.clone(), evidence.finding.clone(), NodeKind::Evidence)
                .with_paper(reference),
        );

        let sequence = sequencer.next(&id, expanded);
        let mut edge = GraphEdge::new(id, expanded.clone(), Relationship::Supports, sequence)
            .with_source_paper(evidence.paper_id.clone());
        if let Some(quote) = &evidence.quote {
            edge = edge.with_evidence_quote(quote.clone());
        }
        out.edges.push(edge);
    }

    for counter in &response.counter_arguments {
        let slug = slugify(&counter.argument);
        if slug.is_empty() {
            tracing::debug!("skipping counter-argument with empty slug");
            continue;
        }
        let id = NodeId::new(slug);

        let mut node = GraphNode::new(
            id.clone(),
            counter.argument.clone(),
            NodeKind::CounterArgument,
        )
        .with_paper(PaperReference::new(
            counter.paper_id.clone(),
            counter.paper_title.clone(),
            String::new(),
        ));
        if let Some(limitation) = &counter.limitation_type {
            node = node.with_relevance_note(limitation.clone());
        }
        out.nodes.push(node);

        let sequence = sequencer.next(&id, expanded);
        out.edges.push(
            GraphEdge::new(id, expanded.clone(), Relationship::Contradicts, sequence)
                .with_source_paper(counter.paper_id.clone()),
        );
    }

    for cross in &response.cross_domain {
        let slug = slugify(&cross.concept);
        if slug.is_empty() {
            tracing::debug!(domain = %cross.domain, "skipping cross-domain entry with empty slug");
            continue;
        }
        let id = NodeId::new(slug);

        out.nodes.push(
            GraphNode::new(id.clone(), cross.concept.clone(), NodeKind::CrossDomain)
                .with_description(cross.connection.clone())
                .with_relevance_note(cross.domain.clone()),
        );

        let sequence = sequencer.next(expanded, &id);
        let mut edge = GraphEdge::new(expanded.clone(), id, Relationship::Extends, sequence)
            .with_source_paper(cross.paper_id.clone());
        if let Some(quote) = &cross.evidence_quote {
            edge = edge.with_evidence_quote(quote.clone());
        }
        out.edges.push(edge);
    }

    out
}
