//! Farcaster hub access for frame-usage.
//!
//! [`HubClient`] is the seam the rest of the workspace depends on; the
//! production implementation is [`HttpHubClient`], which talks to a hub's
//! HTTP API.

mod client;
mod error;
mod http;
mod types;

pub use client::HubClient;
pub use error::HubError;
pub use http::HttpHubClient;
pub use types::{MessageValidation, StorageLimit, StorageLimits, ValidatedMessage};
