//! Helpers for running CPU-bound work (rasterizing) in async handlers.

use tokio::task::spawn_blocking;

use crate::api_error::{ApiError, IMAGE_ERROR};

/// Runs a blocking closure on the blocking pool and converts its error into
/// an [`ApiError`]. A panicked or cancelled task becomes an internal error.
///
/// # Example
/// ```ignore
/// let rasterizer = state.rasterizer.clone();
/// let png = blocking_result(move || rasterizer.render_png(&svg)).await?;
/// ```
pub async fn blocking_result<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    spawn_blocking(f).await.map_err(|e| ApiError::internal(IMAGE_ERROR, e))?.map_err(Into::into)
}
