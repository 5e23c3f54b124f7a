//! Typed error enums for the core crate.

use thiserror::Error;

/// Errors from turning a URL token back into a [`StatsRecord`](crate::StatsRecord).
#[derive(Debug, Error)]
pub enum CodecError {
    /// Token is not valid base64.
    #[error("malformed token: {0}")]
    MalformedToken(#[from] base64::DecodeError),

    /// Decoded bytes are not a JSON stats record (bad UTF-8, bad JSON, wrong shape).
    #[error("malformed record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// Record could not be serialized.
    #[error("record serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors from parsing core enums.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown store type: {0}")]
    UnknownStoreType(String),
}
