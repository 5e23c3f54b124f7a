use std::sync::Arc;

use frame_usage_core::{StatsRecord, StoreType, UsageLimit};
use frame_usage_hub::{HubClient, MessageValidation, StorageLimits};

use crate::ServiceError;

/// Statistics resolved for one frame action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFrame {
    pub record: StatsRecord,
    /// Button the user pressed, as reported by the validated message.
    pub button_index: Option<u32>,
}

/// Resolves frame actions against a hub.
///
/// Makes at most one validation call and one storage call per action, in
/// that order, with no caching or retry.
pub struct StatsService {
    hub: Arc<dyn HubClient>,
}

impl StatsService {
    #[must_use]
    pub fn new(hub: Arc<dyn HubClient>) -> Self {
        Self { hub }
    }

    /// Validates the hex-encoded signed message and fetches the sender's
    /// storage usage.
    pub async fn resolve(&self, message_hex: &str) -> Result<ResolvedFrame, ServiceError> {
        let message = decode_message_hex(message_hex)?;

        let validated = match self.hub.validate_message(&message).await {
            Ok(MessageValidation::Valid(validated)) => validated,
            Ok(MessageValidation::Invalid) => {
                return Err(ServiceError::ValidationFailure(
                    "hub reported the message as invalid".to_owned(),
                ));
            },
            Err(e) if e.is_rejection() => {
                return Err(ServiceError::ValidationFailure(e.to_string()));
            },
            Err(e) => return Err(ServiceError::UpstreamUnavailable(e)),
        };

        let limits = self
            .hub
            .storage_limits(validated.fid)
            .await
            .map_err(ServiceError::UpstreamUnavailable)?;

        tracing::debug!(fid = validated.fid, units = limits.units, "resolved storage limits");
        Ok(ResolvedFrame {
            record: stats_record(validated.fid, &limits),
            button_index: validated.button_index,
        })
    }
}

fn decode_message_hex(message_hex: &str) -> Result<Vec<u8>, ServiceError> {
    let trimmed = message_hex.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(ServiceError::ValidationFailure("missing trustedData.messageBytes".to_owned()));
    }
    hex::decode(digits).map_err(|e| {
        ServiceError::ValidationFailure(format!("messageBytes is not valid hex: {e}"))
    })
}

/// Builds a record from hub storage limits. Unknown store types are skipped.
#[must_use]
pub fn stats_record(fid: u64, limits: &StorageLimits) -> StatsRecord {
    let mut record = StatsRecord::new(fid).with_storage_units(limits.units);
    for limit in &limits.limits {
        match limit.store_type.parse::<StoreType>() {
            Ok(store_type) => {
                record.limits.set(store_type, UsageLimit::new(limit.used, limit.limit));
            },
            Err(e) => tracing::debug!(fid, "skipping storage limit: {e}"),
        }
    }
    record
}
