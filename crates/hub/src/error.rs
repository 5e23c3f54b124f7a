//! Typed error enum for hub calls.

use thiserror::Error;

/// Errors from hub API operations.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl HubError {
    /// Whether the hub refused the request itself (4xx), as opposed to being
    /// unreachable or failing internally.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::HttpStatus { code, .. } if (400..500).contains(code))
    }
}
