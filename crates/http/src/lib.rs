//! HTTP server for frame-usage.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod blocking;
mod frame;
mod handlers;
mod query_types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use frame_usage_render::Rasterizer;
use frame_usage_service::StatsService;

pub use frame::FramePage;

/// Shared application state for all HTTP handlers.
///
/// Holds only immutable collaborators; requests never share mutable state.
pub struct AppState {
    /// Resolves frame actions. `None` when no hub is configured.
    pub stats_service: Option<Arc<StatsService>>,
    /// PNG rasterizer with the process-wide font database
    pub rasterizer: Arc<Rasterizer>,
    /// Public base URL for links in frame meta tags. Falls back to the Host header.
    pub public_url: Option<String>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::landing::landing_page))
        .route("/health", get(health))
        .route("/landing.png", get(handlers::landing::landing_image))
        .route("/image", get(handlers::image::usage_image))
        .route(
            "/action",
            post(handlers::action::frame_action).fallback(handlers::action::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
