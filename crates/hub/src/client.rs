use async_trait::async_trait;

use crate::error::HubError;
use crate::types::{MessageValidation, StorageLimits};

/// Hub operations needed to resolve a frame action into usage statistics.
#[async_trait]
pub trait HubClient: Send + Sync {
    /// Ask the hub whether `message` (protobuf-encoded `Message` bytes) is
    /// validly signed, and return its claims if so.
    async fn validate_message(&self, message: &[u8]) -> Result<MessageValidation, HubError>;

    /// Current storage limits and usage for `fid`.
    async fn storage_limits(&self, fid: u64) -> Result<StorageLimits, HubError>;
}
