//! Typed error enum for the service layer.

use frame_usage_hub::HubError;
use thiserror::Error;

/// Failure to resolve a frame action into statistics.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The signed message is missing, malformed or rejected by the hub.
    #[error("{0}")]
    ValidationFailure(String),

    /// The hub could not be reached or failed while answering.
    #[error("hub unavailable: {0}")]
    UpstreamUnavailable(#[source] HubError),
}
