//! Edge relationship vocabulary.

use crate::kind::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Semantic relationship carried by an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Source regulates target
    Regulates,
    /// Source enables target
    Enables,
    /// Source disrupts target
    Disrupts,
    /// Source precedes target
    Precedes,
    /// Source correlates with target
    CorrelatesWith,
    /// Source is required for target
    RequiredFor,
    /// Source inhibits target
    Inhibits,
    /// Source activates target
    Activates,
    /// Source produces target
    Produces,
    /// Source is expressed in target
    ExpressedIn,
    /// Source interacts with target
    InteractsWith,
    /// Source is part of target
    PartOf,
    /// Source is measured by target
    MeasuredBy,
    /// Source supports target (evidence toward a claim)
    Supports,
    /// Source contradicts target (counter-argument toward a claim)
    Contradicts,
    /// Source extends target into another domain
    Extends,
}

impl Relationship {
    /// Canonical snake_case spelling
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regulates => "regulates",
            Self::Enables => "enables",
            Self::Disrupts => "disrupts",
            Self::Precedes => "precedes",
            Self::CorrelatesWith => "correlates_with",
            Self::RequiredFor => "required_for",
            Self::Inhibits => "inhibits",
            Self::Activates => "activates",
            Self::Produces => "produces",
            Self::ExpressedIn => "expressed_in",
            Self::InteractsWith => "interacts_with",
            Self::PartOf => "part_of",
            Self::MeasuredBy => "measured_by",
            Self::Supports => "supports",
            Self::Contradicts => "contradicts",
            Self::Extends => "extends",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regulates" => Ok(Self::Regulates),
            "enables" => Ok(Self::Enables),
            "disrupts" => Ok(Self::Disrupts),
            "precedes" => Ok(Self::Precedes),
            "correlates_with" => Ok(Self::CorrelatesWith),
            "required_for" => Ok(Self::RequiredFor),
            "inhibits" => Ok(Self::Inhibits),
            "activates" => Ok(Self::Activates),
            "produces" => Ok(Self::Produces),
            "expressed_in" => Ok(Self::ExpressedIn),
            "interacts_with" => Ok(Self::InteractsWith),
            "part_of" => Ok(Self::PartOf),
            "measured_by" => Ok(Self::MeasuredBy),
            "supports" => Ok(Self::Supports),
            "contradicts" => Ok(Self::Contradicts),
            "extends" => Ok(Self::Extends),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}
