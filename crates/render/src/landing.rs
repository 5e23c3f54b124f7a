//! Title card shown before the user interacts with the frame.

use crate::chart::{CANVAS_WIDTH, CHART_ROWS, canvas, text, track};

/// Renders the landing card as SVG markup.
#[must_use]
pub fn render_landing() -> String {
    let center = f64::from(CANVAS_WIDTH) / 2.0;
    let tracks = CHART_ROWS
        .iter()
        .enumerate()
        .map(|(i, (_, store_type))| track(format!("{store_type}-track"), 260.0 + 40.0 * i as f64));
    canvas()
        .child(text(center, 140.0, 44, "Farcaster usage").attr("text-anchor", "middle"))
        .child(text(center, 196.0, 22, "Click to view usage").attr("text-anchor", "middle"))
        .children(tracks)
        .to_string()
}
