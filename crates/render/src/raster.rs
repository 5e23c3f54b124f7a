//! PNG rasterization of SVG markup via `resvg`.

use std::path::Path;
use std::sync::Arc;

use resvg::{tiny_skia, usvg};

use crate::error::RenderError;

/// Turns SVG markup into PNG bytes.
///
/// Owns the font database so fonts are loaded once per process rather than
/// per image. Cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer").field("font_faces", &self.fontdb.len()).finish()
    }
}

impl Rasterizer {
    /// Loads system fonts plus every font found under `font_dir`.
    #[must_use]
    pub fn new(font_dir: Option<&Path>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = font_dir {
            tracing::debug!(dir = %dir.display(), "loading extra fonts");
            db.load_fonts_dir(dir);
        }
        Self { fontdb: Arc::new(db) }
    }

    /// Rasterizer with no fonts at all. Text is skipped when drawing.
    #[must_use]
    pub fn without_fonts() -> Self {
        Self { fontdb: Arc::new(usvg::fontdb::Database::new()) }
    }

    /// Number of font faces available for text.
    #[must_use]
    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Renders `svg` at its intrinsic size and encodes the result as PNG.
    ///
    /// # Errors
    /// Returns an error if the markup does not parse, the canvas cannot be
    /// allocated or PNG encoding fails.
    pub fn render_png(&self, svg: &str) -> Result<Vec<u8>, RenderError> {
        let options = usvg::Options { fontdb: Arc::clone(&self.fontdb), ..usvg::Options::default() };
        let tree = usvg::Tree::from_str(svg, &options)?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or(RenderError::Canvas { width: size.width(), height: size.height() })?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_chart, render_landing};
    use frame_usage_core::{StatsRecord, StoreType, UsageLimit};

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        (width, height)
    }

    #[test]
    fn test_renders_chart_to_png() {
        let record = StatsRecord::new(1).with_limit(StoreType::Casts, UsageLimit::new(250, 500));
        let png = Rasterizer::without_fonts().render_png(&render_chart(&record)).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
        assert_eq!(png_dimensions(&png), (800, 418));
    }

    #[test]
    fn test_renders_landing_to_png() {
        let png = Rasterizer::without_fonts().render_png(&render_landing()).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_rejects_malformed_markup() {
        let err = Rasterizer::without_fonts().render_png("<svg><rect></svg>").unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_without_fonts_is_empty() {
        assert_eq!(Rasterizer::without_fonts().font_count(), 0);
    }
}
