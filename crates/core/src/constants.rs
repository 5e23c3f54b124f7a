//! Shared constants for frame-usage.

/// Environment variable holding the hub address (`host:port`).
pub const HUB_URL_ENV: &str = "HUB_URL";

/// Environment variable holding the public base URL of this service.
pub const PUBLIC_URL_ENV: &str = "HOST";

/// Environment variable overriding the hub request timeout, in seconds.
pub const HUB_TIMEOUT_ENV: &str = "FRAME_HUB_TIMEOUT_SECS";

/// Environment variable naming an extra directory of fonts for rasterizing.
pub const FONT_DIR_ENV: &str = "FRAME_FONT_DIR";

/// Default hub request timeout in seconds.
pub const DEFAULT_HUB_TIMEOUT_SECS: u64 = 10;

/// `Cache-Control` max-age for generated usage images, in seconds.
pub const IMAGE_MAX_AGE_SECS: u32 = 10;

/// `Cache-Control` max-age for the static landing image, in seconds.
pub const LANDING_MAX_AGE_SECS: u32 = 3600;

/// Frame protocol version advertised in `fc:frame`.
pub const FRAME_VERSION: &str = "vNext";
