//! Session configuration.

use crate::visibility::DepthLimit;
use serde::{Deserialize, Serialize};

/// Tunables for one exploration session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cap on corpus results per oracle category
    pub max_source_results: u32,
    /// Ask the oracle for counter-arguments
    pub include_counter_arguments: bool,
    /// Ask the oracle for cross-domain connections
    pub include_cross_domain: bool,
    /// Depth threshold a fresh session starts at
    pub default_depth: DepthLimit,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With result cap
    #[inline]
    #[must_use]
    pub fn with_max_source_results(mut self, max: u32) -> Self {
        self.max_source_results = max;
        self
    }

    /// With counter-arguments toggled
    #[inline]
    #[must_use]
    pub fn with_counter_arguments(mut self, include: bool) -> Self {
        self.include_counter_arguments = include;
        self
    }

    /// With cross-domain connections toggled
    #[inline]
    #[must_use]
    pub fn with_cross_domain(mut self, include: bool) -> Self {
        self.include_cross_domain = include;
        self
    }

    /// With initial depth threshold
    #[inline]
    #[must_use]
    pub fn with_default_depth(mut self, depth: DepthLimit) -> Self {
        self.default_depth = depth;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_source_results: 5,
            include_counter_arguments: true,
            include_cross_domain: true,
            default_depth: DepthLimit::Hops(1),
        }
    }
}
