//! Typed error enum for the render crate.

use thiserror::Error;

/// Failures while turning SVG markup into PNG bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("svg parse failed: {0}")]
    Parse(#[from] resvg::usvg::Error),
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
}
