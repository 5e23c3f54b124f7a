use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::HubClient;
use crate::error::HubError;
use crate::types::{MessageValidation, StorageLimit, StorageLimits, ValidatedMessage};

/// Client for a hub's HTTP API (`/v1/...`).
#[derive(Debug, Clone)]
pub struct HttpHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHubClient {
    /// Creates a client for the hub at `hub_url`.
    ///
    /// `hub_url` is `host:port`; `https://` is assumed when no scheme is given.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(hub_url: &str, timeout: Duration) -> Result<Self, HubError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HubError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: normalize_base_url(hub_url) })
    }

    /// Hub base URL with the scheme filled in.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, HubError> {
        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            tracing::warn!(
                status = status.as_u16(),
                body = %truncate(&body, 200),
                "hub returned error for {context}"
            );
            return Err(HubError::HttpStatus { code: status.as_u16(), body });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse {context}");
            HubError::JsonParse {
                context: format!("{context} (body: {})", truncate(&body, 200)),
                source: e,
            }
        })
    }
}

fn normalize_base_url(hub_url: &str) -> String {
    let trimmed = hub_url.trim().trim_end_matches('/');
    if trimmed.contains("://") { trimmed.to_owned() } else { format!("https://{trimmed}") }
}

#[derive(Deserialize)]
struct ValidateMessageResponse {
    #[serde(default)]
    valid: bool,
    message: Option<WireMessage>,
}

#[derive(Deserialize)]
struct WireMessage {
    data: Option<WireMessageData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMessageData {
    fid: u64,
    frame_action_body: Option<WireFrameAction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFrameAction {
    button_index: Option<u32>,
}

#[derive(Deserialize)]
struct StorageLimitsResponse {
    #[serde(default)]
    limits: Vec<WireStorageLimit>,
    #[serde(default)]
    units: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStorageLimit {
    store_type: String,
    #[serde(default)]
    used: u64,
    #[serde(default)]
    limit: u64,
}

#[async_trait]
impl HubClient for HttpHubClient {
    async fn validate_message(&self, message: &[u8]) -> Result<MessageValidation, HubError> {
        let response = self
            .client
            .post(format!("{}/v1/validateMessage", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(message.to_vec())
            .send()
            .await?;
        let parsed: ValidateMessageResponse =
            Self::read_json(response, "validateMessage response").await?;

        let data = parsed.message.and_then(|m| m.data);
        Ok(match data {
            Some(data) if parsed.valid => MessageValidation::Valid(ValidatedMessage {
                fid: data.fid,
                button_index: data.frame_action_body.and_then(|b| b.button_index),
            }),
            _ => MessageValidation::Invalid,
        })
    }

    async fn storage_limits(&self, fid: u64) -> Result<StorageLimits, HubError> {
        let response = self
            .client
            .get(format!("{}/v1/storageLimitsByFid", self.base_url))
            .query(&[("fid", fid)])
            .send()
            .await?;
        let parsed: StorageLimitsResponse =
            Self::read_json(response, "storageLimitsByFid response").await?;

        Ok(StorageLimits {
            units: parsed.units,
            limits: parsed
                .limits
                .into_iter()
                .map(|l| StorageLimit { store_type: l.store_type, used: l.used, limit: l.limit })
                .collect(),
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
