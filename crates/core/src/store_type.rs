//! Storage categories tracked by a hub.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Category of messages a hub keeps a storage limit for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreType {
    Casts,
    Reactions,
    Links,
    Verifications,
}

impl StoreType {
    pub const ALL: [Self; 4] = [Self::Casts, Self::Reactions, Self::Links, Self::Verifications];

    /// Position of this category in fixed-size per-category tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Casts => 0,
            Self::Reactions => 1,
            Self::Links => 2,
            Self::Verifications => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casts => "casts",
            Self::Reactions => "reactions",
            Self::Links => "links",
            Self::Verifications => "verifications",
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the hub's protobuf enum names (`STORE_TYPE_CASTS`), the bare
/// upper-case names hubs put in `name` (`CASTS`) and lower-case names.
impl FromStr for StoreType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let name = lower.strip_prefix("store_type_").unwrap_or(&lower);
        match name {
            "casts" => Ok(Self::Casts),
            "reactions" => Ok(Self::Reactions),
            "links" => Ok(Self::Links),
            "verifications" => Ok(Self::Verifications),
            _ => Err(CoreError::UnknownStoreType(s.to_owned())),
        }
    }
}
