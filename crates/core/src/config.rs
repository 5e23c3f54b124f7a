//! Process configuration, read once at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_HUB_TIMEOUT_SECS, FONT_DIR_ENV, HUB_TIMEOUT_ENV, HUB_URL_ENV, PUBLIC_URL_ENV,
};
use crate::env_config::parse_with_default;

/// Runtime configuration for the frame server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Hub address, `host:port` with an optional scheme. `None` disables `/action`.
    pub hub_url: Option<String>,
    /// Public base URL used in frame meta tags. Falls back to the request's Host header.
    pub public_url: Option<String>,
    pub hub_timeout: Duration,
    pub font_dir: Option<PathBuf>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            hub_url: None,
            public_url: None,
            hub_timeout: Duration::from_secs(DEFAULT_HUB_TIMEOUT_SECS),
            font_dir: None,
        }
    }
}

impl FrameConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty =
            |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let timeout_secs = parse_with_default(
            HUB_TIMEOUT_ENV,
            lookup(HUB_TIMEOUT_ENV).as_deref(),
            DEFAULT_HUB_TIMEOUT_SECS,
        );
        Self {
            hub_url: non_empty(HUB_URL_ENV),
            public_url: non_empty(PUBLIC_URL_ENV).map(|u| u.trim_end_matches('/').to_owned()),
            hub_timeout: Duration::from_secs(timeout_secs),
            font_dir: non_empty(FONT_DIR_ENV).map(PathBuf::from),
        }
    }
}
