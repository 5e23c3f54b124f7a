use axum::{
    extract::{Query, State},
    response::Response,
};
use std::sync::Arc;

use frame_usage_core::{decode, IMAGE_MAX_AGE_SECS};
use frame_usage_render::render_chart;

use super::png_response;
use crate::api_error::ApiError;
use crate::blocking::blocking_result;
use crate::query_types::ImageQuery;
use crate::AppState;

/// Renders the usage chart encoded in `?data=<token>` as PNG.
pub async fn usage_image(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, ApiError> {
    let Some(token) = query.data.filter(|d| !d.trim().is_empty()) else {
        return Err(ApiError::BadRequest("Missing user data".to_owned()));
    };
    let record = decode(&token)?;
    let svg = render_chart(&record);
    let rasterizer = state.rasterizer.clone();
    let png = blocking_result(move || rasterizer.render_png(&svg)).await?;
    tracing::debug!(fid = record.fid, bytes = png.len(), "rendered usage image");
    Ok(png_response(png, IMAGE_MAX_AGE_SECS))
}
