use anyhow::{Context, Result};
use std::path::Path;

use frame_usage_core::{decode, FrameConfig};
use frame_usage_render::{render_chart, Rasterizer};

pub(crate) fn run_decode(token: &str) -> Result<()> {
    let record = decode(token)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) fn run_render(token: &str, output: &Path, svg_only: bool) -> Result<()> {
    let record = decode(token)?;
    let svg = render_chart(&record);
    let bytes = if svg_only {
        svg.into_bytes()
    } else {
        let config = FrameConfig::from_env();
        Rasterizer::new(config.font_dir.as_deref()).render_png(&svg)?
    };
    std::fs::write(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(fid = record.fid, path = %output.display(), "chart written");
    Ok(())
}
