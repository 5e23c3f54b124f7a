//! Results returned by a hub.

/// Claims of a message the hub accepted as validly signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMessage {
    pub fid: u64,
    /// 1-based index of the frame button the user pressed, if any.
    pub button_index: Option<u32>,
}

/// Outcome of asking the hub to validate a signed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageValidation {
    Valid(ValidatedMessage),
    Invalid,
}

/// One storage category as reported by the hub.
///
/// `store_type` is kept as the hub spelled it; unknown categories are the
/// caller's to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLimit {
    pub store_type: String,
    pub used: u64,
    pub limit: u64,
}

/// Current storage limits of one fid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageLimits {
    pub units: u64,
    pub limits: Vec<StorageLimit>,
}
