//! Node classification and lifecycle enums.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error for enum spellings the model does not know
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

/// Semantic category of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// General concept
    Concept,
    /// Supporting evidence (a finding from the corpus)
    Evidence,
    /// Counter-argument or limitation
    CounterArgument,
    /// Cross-domain connection
    CrossDomain,
    /// Organism
    Organism,
    /// Experimental technique
    Technique,
    /// Molecule
    Molecule,
    /// Gene
    Gene,
    /// Biological process
    Process,
    /// Observed phenomenon
    Phenomenon,
}

impl NodeKind {
    /// Canonical snake_case spelling
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Evidence => "evidence",
            Self::CounterArgument => "counter_argument",
            Self::CrossDomain => "cross_domain",
            Self::Organism => "organism",
            Self::Technique => "technique",
            Self::Molecule => "molecule",
            Self::Gene => "gene",
            Self::Process => "process",
            Self::Phenomenon => "phenomenon",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept" => Ok(Self::Concept),
            "evidence" => Ok(Self::Evidence),
            "counter_argument" => Ok(Self::CounterArgument),
            "cross_domain" => Ok(Self::CrossDomain),
            "organism" => Ok(Self::Organism),
            "technique" => Ok(Self::Technique),
            "molecule" => Ok(Self::Molecule),
            "gene" => Ok(Self::Gene),
            "process" => Ok(Self::Process),
            "phenomenon" => Ok(Self::Phenomenon),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Expansion lifecycle of a node
///
/// `Collapsed → Expanding → Expanded` on success; `Expanding → Collapsed`
/// on failure (retryable). `Expanded` is terminal within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionState {
    /// Not yet enriched
    #[default]
    Collapsed,
    /// Enrichment request in flight
    Expanding,
    /// Enrichment merged
    Expanded,
}

impl ExpansionState {
    /// Whether a new expansion may start from this state
    #[inline]
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed)
    }

    /// Whether an expansion is currently in flight
    #[inline]
    #[must_use]
    pub fn is_expanding(&self) -> bool {
        matches!(self, Self::Expanding)
    }
}

/// Role a node plays relative to the anchor claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimRole {
    /// Concept named by the claim itself
    ClaimConcept,
    /// Technique used to establish the claim
    ExperimentalTechnique,
    /// Mechanism underlying the claim
    Mechanism,
    /// Background context
    SupportingContext,
}
