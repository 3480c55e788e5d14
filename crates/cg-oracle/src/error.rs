//! Oracle error taxonomy.

/// Failure talking to the Concept Expansion Service
///
/// Every variant is a transport-level failure from the engine's point of
/// view: the graph is left untouched and the expansion may be retried.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Service unreachable or the request never completed
    #[error("expansion service unreachable: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("expansion service returned status {code}")]
    Status {
        /// HTTP status code
        code: u16,
    },

    /// Response body could not be decoded as an expansion response
    #[error("malformed expansion response: {0}")]
    Decode(String),
}

impl OracleError {
    /// Human-readable message suitable for surfacing against a node
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the expansion service. Try again.".to_string(),
            Self::Status { code } => {
                format!("The expansion service failed (status {code}). Try again.")
            }
            Self::Decode(_) => "The expansion service returned an unreadable answer.".to_string(),
        }
    }
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
