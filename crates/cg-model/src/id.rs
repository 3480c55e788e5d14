//! Node and edge identifiers.
//!
//! Node ids are stable string slugs, unique within one exploration session.
//! Edge ids are derived from `(from, to, sequence)` so parallel edges with
//! different semantics can coexist under distinct, stable identities.

use serde::{Deserialize, Serialize};

/// Stable node identifier (string slug, unique per session)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from a raw string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View as `&str`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Stable edge identifier, derived from endpoints plus a sequence number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Derive the id for the `sequence`-th parallel edge between two nodes
    #[inline]
    #[must_use]
    pub fn derive(from: &NodeId, to: &NodeId, sequence: usize) -> Self {
        Self(format!("{from}--{to}--{sequence}"))
    }

    /// View as `&str`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
