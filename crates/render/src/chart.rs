//! Usage chart: one header line and three proportional bars.

use frame_usage_core::{StatsRecord, StoreType, UsageLimit};

use crate::markup::Element;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 418;
/// Width of a bar's background track, and the maximum fill width.
pub const TRACK_WIDTH: f64 = 670.0;
pub const BAR_HEIGHT: f64 = 20.0;

const MARGIN_X: f64 = 20.0;
const LIMIT_X: f64 = 720.0;
const HEADER_Y: f64 = 34.0;
const FIRST_ROW_Y: f64 = 80.0;
const ROW_SPACING: f64 = 70.0;
const LABEL_TO_BAR: f64 = 20.0;
const USAGE_FONT_SIZE: u32 = 14;
const MIN_USAGE_FONT_SIZE: u32 = 8;
/// Room for the right-aligned usage text, clear of the longest row label.
const USAGE_TEXT_MAX_WIDTH: f64 = 320.0;
/// Rough advance of one bold glyph, in ems.
const GLYPH_WIDTH_EM: f64 = 0.62;

const FONT_FAMILY: &str = "Inter, Arial, Helvetica, sans-serif";
const BACKGROUND: &str = "#333333";
const TRACK_FILL: &str = "#555555";
const BAR_FILL: &str = "#8a63d2";
const TEXT_FILL: &str = "#ffffff";

/// Shown in place of a value the hub did not report.
pub const MISSING: &str = "\u{2014}";

/// Rows drawn on the card, top to bottom. Each row reads its own category.
pub const CHART_ROWS: [(&str, StoreType); 3] = [
    ("Casts", StoreType::Casts),
    ("Reactions", StoreType::Reactions),
    ("Follows", StoreType::Links),
];

/// Fill width for `used` out of `limit` on a track of `track` units.
///
/// A zero limit gives an empty bar; over-quota usage is clamped to the full
/// track. The result is always finite.
#[must_use]
pub fn bar_width(used: u64, limit: u64, track: f64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    let ratio = used as f64 / limit as f64;
    (ratio * track).clamp(0.0, track)
}

/// Computed geometry and text for one chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: &'static str,
    pub store_type: StoreType,
    pub usage: Option<UsageLimit>,
    pub fill_width: f64,
}

impl BarRow {
    fn new(label: &'static str, store_type: StoreType, usage: Option<UsageLimit>) -> Self {
        let fill_width = usage.map_or(0.0, |u| bar_width(u.used, u.limit, TRACK_WIDTH));
        Self { label, store_type, usage, fill_width }
    }

    /// `used / limit`, or a dash when the category is missing.
    #[must_use]
    pub fn usage_text(&self) -> String {
        self.usage.map_or_else(|| MISSING.to_owned(), |u| format!("{} / {}", u.used, u.limit))
    }

    #[must_use]
    pub fn limit_text(&self) -> String {
        self.usage.map_or_else(|| MISSING.to_owned(), |u| u.limit.to_string())
    }
}

/// Font size for a row's usage text, shrunk so long counts stay clear of the
/// row label.
#[must_use]
pub fn usage_font_size(text: &str) -> u32 {
    let glyphs = text.chars().count().max(1) as f64;
    let fitted = (USAGE_TEXT_MAX_WIDTH / (glyphs * GLYPH_WIDTH_EM)).floor() as u32;
    fitted.clamp(MIN_USAGE_FONT_SIZE, USAGE_FONT_SIZE)
}

/// Rows for a record, in display order. Missing categories still get a row.
#[must_use]
pub fn chart_rows(record: &StatsRecord) -> [BarRow; 3] {
    CHART_ROWS.map(|(label, store_type)| BarRow::new(label, store_type, record.limit(store_type)))
}

pub(crate) fn text(x: f64, y: f64, size: u32, content: impl Into<String>) -> Element {
    Element::new("text")
        .attr("x", x)
        .attr("y", y)
        .attr("fill", TEXT_FILL)
        .attr("font-family", FONT_FAMILY)
        .attr("font-size", size)
        .attr("font-weight", "bold")
        .text(content)
}

pub(crate) fn canvas() -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", CANVAS_WIDTH)
        .attr("height", CANVAS_HEIGHT)
        .attr("viewBox", format!("0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}"))
        .child(
            Element::new("rect")
                .attr("width", CANVAS_WIDTH)
                .attr("height", CANVAS_HEIGHT)
                .attr("fill", BACKGROUND),
        )
}

pub(crate) fn track(id: String, y: f64) -> Element {
    Element::new("rect")
        .attr("id", id)
        .attr("x", MARGIN_X)
        .attr("y", y)
        .attr("width", TRACK_WIDTH)
        .attr("height", BAR_HEIGHT)
        .attr("fill", TRACK_FILL)
}

fn row_elements(row: &BarRow, index: usize) -> [Element; 5] {
    let label_y = FIRST_ROW_Y + ROW_SPACING * index as f64;
    let bar_y = label_y + LABEL_TO_BAR;
    let name = row.store_type.as_str();
    let usage = row.usage_text();
    [
        text(MARGIN_X, label_y, 16, row.label),
        text(MARGIN_X + TRACK_WIDTH, label_y, usage_font_size(&usage), usage)
            .attr("id", format!("{name}-usage"))
            .attr("text-anchor", "end"),
        track(format!("{name}-track"), bar_y),
        Element::new("rect")
            .attr("id", format!("{name}-fill"))
            .attr("x", MARGIN_X)
            .attr("y", bar_y)
            .attr("width", row.fill_width)
            .attr("height", BAR_HEIGHT)
            .attr("fill", BAR_FILL),
        text(LIMIT_X, bar_y + 15.0, 14, row.limit_text()),
    ]
}

/// Builds the chart document tree for a record.
#[must_use]
pub fn chart_document(record: &StatsRecord) -> Element {
    let units = record.storage_units.map_or_else(|| MISSING.to_owned(), |u| u.to_string());
    let header = [
        text(MARGIN_X, HEADER_Y, 20, format!("FID: {}", record.fid)),
        text(f64::from(CANVAS_WIDTH) - MARGIN_X, HEADER_Y, 16, format!("Storage units: {units}"))
            .attr("text-anchor", "end"),
    ];
    let rows = chart_rows(record);
    canvas()
        .children(header)
        .children(rows.iter().enumerate().flat_map(|(i, row)| row_elements(row, i)))
}

/// Renders the usage chart for a record as SVG markup.
#[must_use]
pub fn render_chart(record: &StatsRecord) -> String {
    chart_document(record).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::usvg;

    fn assert_well_formed(svg: &str) {
        usvg::Tree::from_str(svg, &usvg::Options::default()).unwrap();
    }

    fn fill_attr(svg: &str, store_type: StoreType) -> String {
        let marker = format!("id=\"{}-fill\"", store_type.as_str());
        let start = svg.find(&marker).unwrap();
        let rest = &svg[start..];
        let width_start = rest.find("width=\"").unwrap() + "width=\"".len();
        let width_len = rest[width_start..].find('"').unwrap();
        rest[width_start..width_start + width_len].to_owned()
    }

    #[test]
    fn test_bar_width_half_used() {
        assert_eq!(bar_width(250, 500, 670.0), 335.0);
    }

    #[test]
    fn test_bar_width_zero_limit_is_empty() {
        for used in [0, 1, 250, u64::MAX] {
            let width = bar_width(used, 0, TRACK_WIDTH);
            assert_eq!(width, 0.0);
            assert!(width.is_finite());
        }
    }

    #[test]
    fn test_zero_limit_row_renders_empty_bar() {
        let record =
            StatsRecord::new(4).with_limit(StoreType::Casts, UsageLimit::new(250, 0));
        let svg = render_chart(&record);
        assert_eq!(fill_attr(&svg, StoreType::Casts), "0");
        assert!(svg.contains("250 / 0"));
        assert!(!svg.contains("NaN") && !svg.contains("=\"inf"));
        assert_well_formed(&svg);
    }

    #[test]
    fn test_bar_width_over_quota_clamps_to_track() {
        assert_eq!(bar_width(9000, 5000, TRACK_WIDTH), TRACK_WIDTH);
        assert_eq!(bar_width(u64::MAX, 1, TRACK_WIDTH), TRACK_WIDTH);
    }

    #[test]
    fn test_casts_bar_scenario() {
        let record =
            StatsRecord::new(1).with_limit(StoreType::Casts, UsageLimit::new(250, 500));
        let rows = chart_rows(&record);
        assert_eq!(rows[0].store_type, StoreType::Casts);
        assert_eq!(rows[0].fill_width, 335.0);

        let svg = render_chart(&record);
        assert_eq!(fill_attr(&svg, StoreType::Casts), "335");
        assert!(svg.contains("250 / 500"));
        assert_well_formed(&svg);
    }

    #[test]
    fn test_missing_data_renders_three_empty_rows() {
        let record = StatsRecord::new(77);
        let rows = chart_rows(&record);
        assert!(rows.iter().all(|r| r.fill_width == 0.0 && r.usage.is_none()));

        let svg = render_chart(&record);
        for (_, store_type) in CHART_ROWS {
            assert_eq!(fill_attr(&svg, store_type), "0");
            assert!(svg.contains(&format!("id=\"{}-track\"", store_type.as_str())));
        }
        assert!(svg.contains("FID: 77"));
        assert!(svg.contains(&format!("Storage units: {MISSING}")));
        assert_well_formed(&svg);
    }

    #[test]
    fn test_follows_row_reads_links_not_casts() {
        let record = StatsRecord::new(5)
            .with_limit(StoreType::Casts, UsageLimit::new(500, 500))
            .with_limit(StoreType::Links, UsageLimit::new(0, 2500));
        let rows = chart_rows(&record);
        assert_eq!(rows[2].label, "Follows");
        assert_eq!(rows[2].fill_width, 0.0);

        let svg = render_chart(&record);
        assert_eq!(fill_attr(&svg, StoreType::Casts), "670");
        assert_eq!(fill_attr(&svg, StoreType::Links), "0");
    }

    #[test]
    fn test_over_quota_never_exceeds_track() {
        let record = StatsRecord::new(3)
            .with_storage_units(2)
            .with_limit(StoreType::Reactions, UsageLimit::new(12_000, 5000));
        let svg = render_chart(&record);
        assert_eq!(fill_attr(&svg, StoreType::Reactions), "670");
        assert!(svg.contains("Storage units: 2"));
        assert!(!svg.contains("NaN") && !svg.contains("=\"inf"));
    }

    #[test]
    fn test_fractional_width_is_plain_decimal() {
        let width = bar_width(1, 3, TRACK_WIDTH);
        let text = width.to_string();
        assert!(!text.contains('e'), "{text}");
        assert!(text.starts_with("223.33"));
    }

    #[test]
    fn test_usage_font_size_shrinks_long_counts() {
        assert_eq!(usage_font_size("250 / 500"), 14);
        assert_eq!(usage_font_size(MISSING), 14);
        let huge = format!("{} / {}", u64::MAX, u64::MAX);
        let size = usage_font_size(&huge);
        assert!(size < 14 && size >= 8, "{size}");
        assert!(huge.len() as f64 * f64::from(size) * GLYPH_WIDTH_EM <= USAGE_TEXT_MAX_WIDTH);
    }

    #[test]
    fn test_long_usage_text_is_drawn_smaller() {
        let record = StatsRecord::new(6)
            .with_limit(StoreType::Reactions, UsageLimit::new(u64::MAX, u64::MAX));
        let svg = render_chart(&record);
        let id = svg.find("id=\"reactions-usage\"").unwrap();
        let open = svg[..id].rfind("<text").unwrap();
        let attrs = &svg[open..id];
        assert!(!attrs.contains("font-size=\"14\""), "{attrs}");
        assert_well_formed(&svg);
    }

    #[test]
    fn test_document_has_fixed_canvas_size() {
        let doc = chart_document(&StatsRecord::new(1));
        assert_eq!(doc.name(), "svg");
        assert_eq!(doc.get_attr("width"), Some("800"));
        assert_eq!(doc.get_attr("height"), Some("418"));
    }
}
