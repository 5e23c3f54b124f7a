use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    response::Html,
};
use chrono::Utc;
use std::sync::Arc;

use frame_usage_core::encode;

use super::public_base;
use crate::api_error::{ApiError, IMAGE_ERROR, NO_HUB};
use crate::frame::FramePage;
use crate::query_types::FrameActionRequest;
use crate::AppState;

/// Handles a frame button press: validates the signed message, fetches the
/// sender's storage usage and answers with a frame pointing at the chart.
pub async fn frame_action(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>, ApiError> {
    let Some(service) = state.stats_service.as_ref() else {
        return Err(ApiError::internal(NO_HUB, anyhow::anyhow!("HUB_URL is not set")));
    };

    let request: FrameActionRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Failed to validate message: {e}")))?;
    if let Some(untrusted) = &request.untrusted_data {
        tracing::debug!(
            claimed_fid = ?untrusted.fid,
            button = ?untrusted.button_index,
            url = ?untrusted.url,
            "frame action received"
        );
    }

    let resolved = service.resolve(request.message_bytes()).await?;
    let token = encode(&resolved.record).map_err(|e| ApiError::internal(IMAGE_ERROR, e))?;

    let base = public_base(&state, &headers);
    let image_url = format!(
        "{base}/image?data={}&date={}",
        url::form_urlencoded::byte_serialize(token.as_bytes()).collect::<String>(),
        Utc::now().timestamp_millis()
    );
    tracing::info!(
        fid = resolved.record.fid,
        button = ?resolved.button_index,
        "serving usage frame"
    );
    Ok(Html(FramePage::usage(&base, image_url).to_html()))
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed { method, allow: "POST" }
}
