//! Oracle trait and HTTP implementation.

use crate::error::OracleError;
use crate::wire::{ExpansionRequest, ExpansionResponse};
use async_trait::async_trait;
use std::time::Duration;

/// Interface the engine uses to enrich the graph around one concept
///
/// Implementations must be shareable across tasks; the engine holds the
/// oracle behind an `Arc` and guarantees at most one request in flight.
#[async_trait]
pub trait ConceptExpansionOracle: Send + Sync {
    /// Ask the corpus oracle to expand one concept
    async fn expand(&self, request: &ExpansionRequest) -> Result<ExpansionResponse, OracleError>;
}

/// Configuration for [`HttpExpansionOracle`]
#[derive(Debug, Clone)]
pub struct HttpOracleConfig {
    /// Service base URL, without the trailing endpoint path
    pub base_url: String,
    /// Optional bearer token
    pub bearer_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl HttpOracleConfig {
    /// Config for a base URL with default timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// With bearer token
    #[inline]
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// With per-request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for a hosted Concept Expansion Service
///
/// POSTs the request as JSON to `{base_url}/expand-concept`.
#[derive(Debug, Clone)]
pub struct HttpExpansionOracle {
    config: HttpOracleConfig,
    client: reqwest::Client,
}

impl HttpExpansionOracle {
    /// Create a client for the configured service
    ///
    /// # Errors
    /// Returns [`OracleError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: HttpOracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/expand-concept", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ConceptExpansionOracle for HttpExpansionOracle {
    async fn expand(&self, request: &ExpansionRequest) -> Result<ExpansionResponse, OracleError> {
        let endpoint = self.endpoint();
        tracing::debug!(concept = %request.concept_name, %endpoint, "requesting expansion");

        let mut builder = self.client.post(&endpoint).json(request);
        if let Some(token) = &self.config.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(concept = %request.concept_name, code = status.as_u16(), "expansion request rejected");
            return Err(OracleError::Status {
                code: status.as_u16(),
            });
        }

        let parsed = response
            .json::<ExpansionResponse>()
            .await
            .map_err(|e| OracleError::Decode(e.to_string()))?;

        tracing::debug!(
            concept = %request.concept_name,
            entries = parsed.entry_count(),
            "expansion response received"
        );
        Ok(parsed)
    }
}
