//! Testing utilities for the concept graph workspace
//!
//! Shared fixtures (bootstrap subgraphs, path graphs) and oracle fakes.

#![allow(missing_docs)]

use async_trait::async_trait;
use cg_model::{GraphEdge, GraphNode, NodeKind, Relationship};
use cg_oracle::{
    ConceptExpansionOracle, ExpansionRequest, ExpansionResponse, OracleError, RelatedConcept,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Nodes and edges forming a path graph a--b--c--...
pub fn path_graph(ids: &[&str]) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let nodes = ids
        .iter()
        .map(|id| GraphNode::new(*id, *id, NodeKind::Concept))
        .collect();
    let edges = ids
        .windows(2)
        .map(|pair| GraphEdge::new(pair[0], pair[1], Relationship::Enables, 0))
        .collect();
    (nodes, edges)
}

/// The two-node bioelectric fixture used across session tests
pub fn bioelectric_graph() -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let nodes = vec![
        GraphNode::new("bioelectric_signaling", "Bioelectric Signaling", NodeKind::Concept),
        GraphNode::new("gap_junction", "Gap Junction", NodeKind::Concept),
    ];
    let edges = vec![GraphEdge::new(
        "bioelectric_signaling",
        "gap_junction",
        Relationship::Enables,
        0,
    )];
    (nodes, edges)
}

/// A well-formed related-concept entry
pub fn related_concept(name: &str, relationship: &str) -> RelatedConcept {
    RelatedConcept {
        name: name.to_string(),
        concept_type: "concept".to_string(),
        relationship: relationship.to_string(),
        evidence_quote: Some(format!("evidence for {name}")),
        paper_id: "paper_1".to_string(),
        paper_title: "Fixture paper".to_string(),
        section: None,
        confidence: Some(0.8),
    }
}

/// Oracle that answers every request with the same response
#[derive(Debug)]
pub struct StaticOracle {
    response: ExpansionResponse,
    calls: AtomicUsize,
}

impl StaticOracle {
    pub fn new(response: ExpansionResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(ExpansionResponse::default())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConceptExpansionOracle for StaticOracle {
    async fn expand(&self, _request: &ExpansionRequest) -> Result<ExpansionResponse, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Oracle that fails every request with a transport error
#[derive(Debug, Default)]
pub struct FailingOracle {
    calls: AtomicUsize,
}

impl FailingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConceptExpansionOracle for FailingOracle {
    async fn expand(&self, _request: &ExpansionRequest) -> Result<ExpansionResponse, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(OracleError::Transport("connection refused".to_string()))
    }
}

/// Oracle that pops one scripted result per call, in order
///
/// Calls beyond the script fail with a transport error.
pub struct ScriptedOracle {
    script: Mutex<Vec<Result<ExpansionResponse, OracleError>>>,
    requests: Mutex<Vec<ExpansionRequest>>,
}

impl ScriptedOracle {
    pub fn new(script: Vec<Result<ExpansionResponse, OracleError>>) -> Self {
        let mut script = script;
        script.reverse();
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in call order
    pub fn requests(&self) -> Vec<ExpansionRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl ConceptExpansionOracle for ScriptedOracle {
    async fn expand(&self, request: &ExpansionRequest) -> Result<ExpansionResponse, OracleError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        self.script
            .lock()
            .expect("script lock")
            .pop()
            .unwrap_or_else(|| Err(OracleError::Transport("script exhausted".to_string())))
    }
}

/// Oracle that blocks until released, for in-flight interleaving tests
pub struct GatedOracle {
    response: ExpansionResponse,
    gate: Notify,
    started: Notify,
}

impl GatedOracle {
    pub fn new(response: ExpansionResponse) -> Self {
        Self {
            response,
            gate: Notify::new(),
            started: Notify::new(),
        }
    }

    /// Resolve the pending request
    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// Wait until a request has reached the oracle
    pub async fn wait_for_request(&self) {
        self.started.notified().await;
    }
}

#[async_trait]
impl ConceptExpansionOracle for GatedOracle {
    async fn expand(&self, _request: &ExpansionRequest) -> Result<ExpansionResponse, OracleError> {
        self.started.notify_one();
        self.gate.notified().await;
        Ok(self.response.clone())
    }
}
