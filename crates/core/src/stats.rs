//! Per-request usage statistics exchanged between the action and image handlers.

use serde::{Deserialize, Serialize};

use crate::store_type::StoreType;

/// Used/limit pair for one storage category.
///
/// `used` may exceed `limit` and `limit` may be zero; consumers handle both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLimit {
    pub used: u64,
    pub limit: u64,
}

impl UsageLimit {
    #[must_use]
    pub const fn new(used: u64, limit: u64) -> Self {
        Self { used, limit }
    }
}

/// Fixed-size table of usage limits, one slot per [`StoreType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageLimits([Option<UsageLimit>; StoreType::ALL.len()]);

impl UsageLimits {
    #[must_use]
    pub const fn get(&self, store_type: StoreType) -> Option<UsageLimit> {
        self.0[store_type.index()]
    }

    pub const fn set(&mut self, store_type: StoreType, limit: UsageLimit) {
        self.0[store_type.index()] = Some(limit);
    }
}

/// Statistics for one user, built per request and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireRecord", into = "WireRecord")]
pub struct StatsRecord {
    /// Farcaster id taken from a validated signed message.
    pub fid: u64,
    /// Purchased storage units. Display only.
    pub storage_units: Option<u64>,
    pub limits: UsageLimits,
}

impl StatsRecord {
    #[must_use]
    pub fn new(fid: u64) -> Self {
        Self { fid, storage_units: None, limits: UsageLimits::default() }
    }

    #[must_use]
    pub const fn with_storage_units(mut self, units: u64) -> Self {
        self.storage_units = Some(units);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, store_type: StoreType, limit: UsageLimit) -> Self {
        self.limits.set(store_type, limit);
        self
    }

    #[must_use]
    pub const fn limit(&self, store_type: StoreType) -> Option<UsageLimit> {
        self.limits.get(store_type)
    }
}

/// JSON shape carried inside a token. Absent categories are omitted.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    #[serde(alias = "userId")]
    fid: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_units: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    casts_limit: Option<UsageLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reactions_limit: Option<UsageLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    links_limit: Option<UsageLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verifications_limit: Option<UsageLimit>,
}

impl From<WireRecord> for StatsRecord {
    fn from(wire: WireRecord) -> Self {
        let mut limits = UsageLimits::default();
        let slots = [
            (StoreType::Casts, wire.casts_limit),
            (StoreType::Reactions, wire.reactions_limit),
            (StoreType::Links, wire.links_limit),
            (StoreType::Verifications, wire.verifications_limit),
        ];
        for (store_type, limit) in slots {
            if let Some(limit) = limit {
                limits.set(store_type, limit);
            }
        }
        Self { fid: wire.fid, storage_units: wire.storage_units, limits }
    }
}

impl From<StatsRecord> for WireRecord {
    fn from(record: StatsRecord) -> Self {
        Self {
            fid: record.fid,
            storage_units: record.storage_units,
            casts_limit: record.limit(StoreType::Casts),
            reactions_limit: record.limit(StoreType::Reactions),
            links_limit: record.limit(StoreType::Links),
            verifications_limit: record.limit(StoreType::Verifications),
        }
    }
}
