//! Shared data model for the concept graph engine.
//!
//! Defines the neutral, render-agnostic records the engine operates on:
//! - Node and edge identifiers ([`NodeId`], [`EdgeId`])
//! - Graph entities ([`GraphNode`], [`GraphEdge`], [`PaperReference`])
//! - Classification enums ([`NodeKind`], [`Relationship`], [`ExpansionState`],
//!   [`ClaimRole`])
//! - Slug normalization for deterministic node identity ([`slugify`])

#![warn(unreachable_pub)]

pub mod edge;
pub mod id;
pub mod kind;
pub mod node;
pub mod relationship;
pub mod slug;

pub use edge::GraphEdge;
pub use id::{EdgeId, NodeId};
pub use kind::{ClaimRole, ExpansionState, NodeKind, UnknownVariant};
pub use node::{GraphNode, PaperReference};
pub use relationship::Relationship;
pub use slug::slugify;
