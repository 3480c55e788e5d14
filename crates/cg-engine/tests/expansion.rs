//! Expansion coordinator behavior: single-flight, additivity, rollback,
//! and stale-response handling.

use cg_engine::{BootstrapGraph, ConceptGraphSession, DepthLimit, ExpandOutcome, SessionConfig};
use cg_model::{ExpansionState, NodeId};
use cg_oracle::{ConceptExpansionOracle, CounterArgument, ExpansionResponse, OracleError};
use cg_test_utils::{
    bioelectric_graph, related_concept, FailingOracle, GatedOracle, ScriptedOracle, StaticOracle,
};
use std::sync::Arc;

fn anchor() -> NodeId {
    NodeId::new("bioelectric_signaling")
}

fn session_with(oracle: Arc<dyn ConceptExpansionOracle>) -> ConceptGraphSession {
    ConceptGraphSession::new(oracle, SessionConfig::default())
}

async fn bootstrap(session: &ConceptGraphSession) {
    let (nodes, edges) = bioelectric_graph();
    session
        .bootstrap(
            BootstrapGraph::new(nodes, edges)
                .with_matched_entities(vec!["bioelectric_signaling".to_string()])
                .with_anchor_context("Bioelectric signaling enables regeneration")
                .with_depth(DepthLimit::Unbounded),
        )
        .await;
}

fn enriching_response() -> ExpansionResponse {
    ExpansionResponse {
        related_concepts: vec![related_concept("Ion Channel Regulation", "regulates")],
        counter_arguments: vec![CounterArgument {
            argument: "Effect absent in amniotes".to_string(),
            paper_id: "paper_2".to_string(),
            paper_title: "A skeptical review".to_string(),
            limitation_type: Some("scope".to_string()),
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn successful_expansion_grows_graph_and_marks_expanded() {
    let session = session_with(Arc::new(StaticOracle::new(enriching_response())));
    bootstrap(&session).await;

    let outcome = session.expand(&anchor()).await;
    assert_eq!(
        outcome,
        ExpandOutcome::Expanded {
            added_nodes: 2,
            added_edges: 2
        }
    );

    let projection = session.projection().await;
    assert_eq!(projection.visible_nodes.len(), 4);
    assert_eq!(projection.visible_edges.len(), 3);

    let expanded = projection
        .visible_nodes
        .iter()
        .find(|n| n.id == anchor())
        .unwrap();
    assert_eq!(expanded.expansion_state, ExpansionState::Expanded);
}

#[tokio::test]
async fn expansion_is_strictly_additive() {
    let session = session_with(Arc::new(StaticOracle::new(enriching_response())));
    bootstrap(&session).await;

    let before = session.projection().await;
    let untouched_before = before
        .visible_nodes
        .iter()
        .find(|n| n.id.as_str() == "gap_junction")
        .cloned()
        .unwrap();
    let edge_before = before.visible_edges[0].clone();

    session.expand(&anchor()).await;

    let after = session.projection().await;
    let untouched_after = after
        .visible_nodes
        .iter()
        .find(|n| n.id.as_str() == "gap_junction")
        .cloned()
        .unwrap();
    assert_eq!(untouched_before, untouched_after);
    assert!(after.visible_edges.contains(&edge_before));
}

#[tokio::test]
async fn failed_expansion_rolls_back_and_records_error() {
    let oracle = Arc::new(FailingOracle::new());
    let session = session_with(oracle.clone());
    bootstrap(&session).await;

    let before = session.projection().await;
    let outcome = session.expand(&anchor()).await;

    let ExpandOutcome::Failed { message } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(!message.is_empty());

    let after = session.projection().await;
    assert_eq!(before.visible_nodes, after.visible_nodes);
    assert_eq!(before.visible_edges, after.visible_edges);

    let node = after
        .visible_nodes
        .iter()
        .find(|n| n.id == anchor())
        .unwrap();
    assert_eq!(node.expansion_state, ExpansionState::Collapsed);
    assert_eq!(session.expansion_error(&anchor()).await, Some(message));
    assert_eq!(oracle.call_count(), 1);
}

#[tokio::test]
async fn failed_expansion_is_retryable_and_error_clears_on_success() {
    let oracle = Arc::new(ScriptedOracle::new(vec![
        Err(OracleError::Transport("first try".to_string())),
        Ok(enriching_response()),
    ]));
    let session = session_with(oracle);
    bootstrap(&session).await;

    assert!(matches!(
        session.expand(&anchor()).await,
        ExpandOutcome::Failed { .. }
    ));
    assert!(session.expansion_error(&anchor()).await.is_some());

    assert!(matches!(
        session.expand(&anchor()).await,
        ExpandOutcome::Expanded { .. }
    ));
    assert_eq!(session.expansion_error(&anchor()).await, None);
}

#[tokio::test]
async fn second_expand_is_noop_while_one_is_in_flight() {
    let oracle = Arc::new(GatedOracle::new(enriching_response()));
    let session = Arc::new(session_with(oracle.clone()));
    bootstrap(&session).await;

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.expand(&anchor()).await })
    };
    oracle.wait_for_request().await;

    // another collapsed node must be refused while the first is pending
    let other = NodeId::new("gap_junction");
    assert_eq!(session.expand(&other).await, ExpandOutcome::Ignored);
    let inspector = session.node_inspector(&other).await.unwrap();
    assert!(!inspector.can_expand);

    oracle.release();
    assert!(matches!(
        pending.await.unwrap(),
        ExpandOutcome::Expanded { .. }
    ));

    // once the flight is over, the other node is expandable again
    let inspector = session.node_inspector(&other).await.unwrap();
    assert!(inspector.can_expand);
    let projection = session.projection().await;
    let other_node = projection
        .visible_nodes
        .iter()
        .find(|n| n.id == other)
        .unwrap();
    assert_eq!(other_node.expansion_state, ExpansionState::Collapsed);
}

#[tokio::test]
async fn session_stays_responsive_while_expansion_pending() {
    let oracle = Arc::new(GatedOracle::new(ExpansionResponse::default()));
    let session = Arc::new(session_with(oracle.clone()));
    bootstrap(&session).await;

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.expand(&anchor()).await })
    };
    oracle.wait_for_request().await;

    // selection, depth changes, and projection all work mid-flight
    session.select_node(&NodeId::new("gap_junction")).await;
    session.set_depth(DepthLimit::Hops(0)).await;
    let projection = session.projection().await;
    assert_eq!(projection.expanding, Some(anchor()));
    assert_eq!(projection.depth, DepthLimit::Hops(0));

    oracle.release();
    pending.await.unwrap();
}

#[tokio::test]
async fn reexpanding_an_expanded_node_is_rejected() {
    let oracle = Arc::new(StaticOracle::new(enriching_response()));
    let session = session_with(oracle.clone());
    bootstrap(&session).await;

    assert!(matches!(
        session.expand(&anchor()).await,
        ExpandOutcome::Expanded { .. }
    ));
    assert_eq!(session.expand(&anchor()).await, ExpandOutcome::Ignored);
    assert_eq!(oracle.call_count(), 1);
}

#[tokio::test]
async fn expanding_unknown_node_is_noop() {
    let oracle = Arc::new(StaticOracle::empty());
    let session = session_with(oracle.clone());
    bootstrap(&session).await;

    assert_eq!(
        session.expand(&NodeId::new("ghost")).await,
        ExpandOutcome::Ignored
    );
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn empty_response_is_terminal_not_an_error() {
    let session = session_with(Arc::new(StaticOracle::empty()));
    bootstrap(&session).await;

    assert_eq!(
        session.expand(&anchor()).await,
        ExpandOutcome::Expanded {
            added_nodes: 0,
            added_edges: 0
        }
    );
    assert_eq!(session.expansion_error(&anchor()).await, None);

    let projection = session.projection().await;
    let node = projection
        .visible_nodes
        .iter()
        .find(|n| n.id == anchor())
        .unwrap();
    assert_eq!(node.expansion_state, ExpansionState::Expanded);
}

#[tokio::test]
async fn response_after_reset_is_discarded() {
    let oracle = Arc::new(GatedOracle::new(enriching_response()));
    let session = Arc::new(session_with(oracle.clone()));
    bootstrap(&session).await;

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.expand(&anchor()).await })
    };
    oracle.wait_for_request().await;

    // tear the session down to a new anchor while the request is in flight
    let (nodes, edges) = bioelectric_graph();
    session
        .reset(BootstrapGraph::new(nodes, edges).with_depth(DepthLimit::Unbounded))
        .await;

    oracle.release();
    assert_eq!(pending.await.unwrap(), ExpandOutcome::Stale);

    // the new anchor's graph is untouched by the stale response
    let projection = session.projection().await;
    assert_eq!(projection.visible_nodes.len(), 2);
    assert!(projection.expanding.is_none());
    for node in &projection.visible_nodes {
        assert_eq!(node.expansion_state, ExpansionState::Collapsed);
    }
}

#[tokio::test]
async fn request_carries_label_context_and_config() {
    let oracle = Arc::new(ScriptedOracle::new(vec![Ok(ExpansionResponse::default())]));
    let session = ConceptGraphSession::new(
        oracle.clone(),
        SessionConfig::default()
            .with_max_source_results(3)
            .with_cross_domain(false),
    );
    bootstrap(&session).await;

    session.expand(&anchor()).await;

    let requests = oracle.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].concept_name, "Bioelectric Signaling");
    assert_eq!(
        requests[0].concept_context.as_deref(),
        Some("Bioelectric signaling enables regeneration")
    );
    assert_eq!(requests[0].max_source_results, 3);
    assert!(requests[0].include_counter_arguments);
    assert!(!requests[0].include_cross_domain);
}

#[tokio::test]
async fn reexpansion_of_same_entity_name_deduplicates() {
    // expanding both anchor nodes returns the same related entity; the
    // second merge must reuse the first node rather than add a twin
    let response = ExpansionResponse {
        related_concepts: vec![related_concept("Voltage Gradient", "enables")],
        ..Default::default()
    };
    let oracle = Arc::new(ScriptedOracle::new(vec![
        Ok(response.clone()),
        Ok(response),
    ]));
    let session = session_with(oracle);
    bootstrap(&session).await;

    let first = session.expand(&anchor()).await;
    assert_eq!(
        first,
        ExpandOutcome::Expanded {
            added_nodes: 1,
            added_edges: 1
        }
    );

    let second = session.expand(&NodeId::new("gap_junction")).await;
    assert_eq!(
        second,
        ExpandOutcome::Expanded {
            added_nodes: 0,
            added_edges: 1
        }
    );

    let projection = session.projection().await;
    let voltage_nodes = projection
        .visible_nodes
        .iter()
        .filter(|n| n.id.as_str() == "voltage_gradient")
        .count();
    assert_eq!(voltage_nodes, 1);
}
