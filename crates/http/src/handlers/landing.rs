use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, Response},
};
use std::sync::Arc;

use frame_usage_core::LANDING_MAX_AGE_SECS;
use frame_usage_render::render_landing;

use super::{png_response, public_base};
use crate::api_error::ApiError;
use crate::blocking::blocking_result;
use crate::frame::FramePage;
use crate::AppState;

/// Initial frame page advertising the landing image and the action URL.
pub async fn landing_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    Html(FramePage::landing(&public_base(&state, &headers)).to_html())
}

pub async fn landing_image(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let rasterizer = state.rasterizer.clone();
    let png = blocking_result(move || rasterizer.render_png(&render_landing())).await?;
    Ok(png_response(png, LANDING_MAX_AGE_SECS))
}
