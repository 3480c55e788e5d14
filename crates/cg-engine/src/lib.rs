//! Incremental concept-graph expansion engine.
//!
//! One exploration session owns a growing graph of concepts, evidence, and
//! counter-arguments anchored to a claim. The engine:
//! - accumulates nodes and edges through idempotent merges ([`store`])
//! - computes hop distances from the seed set by multi-source BFS
//!   ([`distance`])
//! - projects the visible subgraph for a chosen depth ([`visibility`])
//! - resolves seeds from caller-supplied matched entities ([`seeds`])
//! - grows the graph around one node at a time via the expansion oracle
//!   ([`session`], [`translate`])
//! - tracks the single inspected node or edge ([`selection`])
//!
//! # Example
//!
//! ```rust,ignore
//! use cg_engine::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example(oracle: Arc<dyn cg_oracle::ConceptExpansionOracle>) {
//! let session = ConceptGraphSession::new(oracle, SessionConfig::default());
//! session.reset(bootstrap).await;
//!
//! session.set_depth(DepthLimit::Hops(1)).await;
//! let outcome = session.expand(&"bioelectric_signaling".into()).await;
//! let projection = session.projection().await;
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod distance;
pub mod seeds;
pub mod selection;
pub mod session;
pub mod store;
pub mod translate;
pub mod visibility;

pub use config::SessionConfig;
pub use distance::{hop_distances, DistanceMap, HopDistance};
pub use seeds::{
    DirectMatchResolver, ExactIdResolver, LabelResolver, SeedResolution, SeedResolver,
};
pub use selection::{EdgeInspector, NodeInspector, Selection, SelectionManager};
pub use session::{BootstrapGraph, ConceptGraphSession, ExpandOutcome, GraphProjection};
pub use store::{GraphStore, MergeOutcome};
pub use visibility::{visible_subgraph, DepthLimit, VisibleSubgraph};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the concept graph engine
    pub use crate::{
        BootstrapGraph, ConceptGraphSession, DepthLimit, ExpandOutcome, GraphProjection,
        HopDistance, Selection, SessionConfig,
    };
    pub use cg_model::{GraphEdge, GraphNode, NodeId, NodeKind, Relationship};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
