//! Concept Expansion Service boundary.
//!
//! The expansion oracle is a remote service that, given a concept name and
//! optional context, returns related concepts, supporting evidence,
//! counter-arguments, and cross-domain connections drawn from a document
//! corpus. This crate holds:
//! - the wire contract ([`ExpansionRequest`], [`ExpansionResponse`])
//! - the [`ConceptExpansionOracle`] trait the engine depends on
//! - an HTTP implementation ([`HttpExpansionOracle`])

#![warn(unreachable_pub)]

pub mod client;
pub mod error;
pub mod wire;

pub use client::{ConceptExpansionOracle, HttpExpansionOracle, HttpOracleConfig};
pub use error::OracleError;
pub use wire::{
    CounterArgument, CrossDomainConnection, ExpansionRequest, ExpansionResponse, RelatedConcept,
    SupportingEvidence,
};
