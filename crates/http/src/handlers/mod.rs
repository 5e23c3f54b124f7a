pub mod action;
pub mod image;
pub mod landing;

use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};

use crate::AppState;

/// Base URL that frame clients should use to reach this server.
///
/// The configured public URL wins; otherwise the request's Host header is
/// assumed to be served over HTTPS.
pub(crate) fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.public_url {
        return url.clone();
    }
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| "http://localhost".to_owned(), |host| format!("https://{host}"))
}

pub(crate) fn png_response(png: Vec<u8>, max_age_secs: u32) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/png".to_owned()),
            (header::CACHE_CONTROL, format!("max-age={max_age_secs}")),
        ],
        png,
    )
        .into_response()
}
