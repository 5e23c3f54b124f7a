//! Request/query types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    /// Token produced by `frame_usage_core::encode`.
    pub data: Option<String>,
}

/// Body a frame client POSTs when a button is pressed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameActionRequest {
    #[serde(default)]
    pub untrusted_data: Option<UntrustedData>,
    #[serde(default)]
    pub trusted_data: Option<TrustedData>,
}

impl FrameActionRequest {
    /// Hex-encoded signed message, empty when the client sent none.
    pub fn message_bytes(&self) -> &str {
        self.trusted_data.as_ref().map_or("", |t| t.message_bytes.as_str())
    }
}

/// Unsigned copy of the action. Only logged, never trusted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    pub fid: Option<u64>,
    pub url: Option<String>,
    pub button_index: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    #[serde(default)]
    pub message_bytes: String,
}
