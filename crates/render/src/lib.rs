//! Usage chart rendering for frame-usage.
//!
//! Builds the SVG card for a [`StatsRecord`](frame_usage_core::StatsRecord)
//! with a small element tree, then rasterizes it to PNG with `resvg`.

mod chart;
mod error;
mod landing;
pub mod markup;
mod raster;

pub use chart::*;
pub use error::RenderError;
pub use landing::render_landing;
pub use raster::Rasterizer;
