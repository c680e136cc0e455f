//! Per-chart style configuration.
//!
//! Every builder takes a [`ChartStyle`] so "what data" stays separate
//! from "how styled". The presets reproduce the dashboard's house
//! style: rates charts carry the FRED source note, equity charts get
//! tight side margins.

use crate::figure::{Annotation, AxisSpec, ColorScale, Layout, Margin, Title};

/// Source attribution shown under every rates chart
pub const DATA_SOURCE_NOTE: &str = "Data Source: FRED - Federal Reserve Economic Data";

/// Plotly's default qualitative cycle, used for per-sector coloring
pub const QUALITATIVE_PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Fixed palette for the grouped sector-return bars
pub const SECTOR_BAR_PALETTE: [&str; 3] = ["darkgrey", "grey", "indianred"];

/// Outline color for scatter markers
pub const MARKER_OUTLINE: &str = "DarkSlateGrey";

/// Color for the n-th series of a multi-trace chart
pub fn palette_color(index: usize) -> &'static str {
    QUALITATIVE_PALETTE[index % QUALITATIVE_PALETTE.len()]
}

/// Plotly `sizeref` so the largest bubble lands at `max_px` pixels when
/// sizing markers by area
pub fn area_size_ref(max_value: f64, max_px: f64) -> f64 {
    if max_value <= 0.0 {
        return 1.0;
    }
    2.0 * max_value / (max_px * max_px)
}

/// Explicit style parameters for one chart
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Chart title
    pub title: Option<String>,
    /// Title font size, when the house style enlarges it
    pub title_size: Option<u32>,
    /// Fixed chart height in pixels
    pub height: u32,
    /// Continuous colorscale, for charts that map values to color
    pub colorscale: Option<ColorScale>,
    /// Below-axis annotation (data source attribution)
    pub annotation_text: Option<String>,
    /// X-axis title
    pub x_title: Option<String>,
    /// Y-axis title
    pub y_title: Option<String>,
    /// Fixed y-axis range
    pub y_range: Option<[f64; 2]>,
    /// Plot margins
    pub margin: Option<Margin>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: None,
            title_size: None,
            height: 500,
            colorscale: None,
            annotation_text: None,
            x_title: None,
            y_title: None,
            y_range: None,
            margin: None,
        }
    }
}

impl ChartStyle {
    /// House style for the rates charts: height 500, 20-pt title, FRED
    /// source note.
    pub fn rates(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            title_size: Some(20),
            annotation_text: Some(DATA_SOURCE_NOTE.to_string()),
            height: 500,
            ..Self::default()
        }
    }

    /// House style for the equity charts: height 600, tight side margins.
    pub fn equities(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            height: 600,
            margin: Some(Margin::sides(20, 20)),
            ..Self::default()
        }
    }
}

/// Map a style onto a layout. Builders call this first and then fill in
/// the chart-specific pieces (tickformats, scene, barmode).
pub fn apply_style(layout: &mut Layout, style: &ChartStyle) {
    if let Some(title) = &style.title {
        layout.title = Some(match style.title_size {
            Some(size) => Title::sized(title.clone(), size),
            None => Title::new(title.clone()),
        });
    }
    layout.autosize = Some(true);
    layout.height = Some(style.height);
    layout.margin = style.margin.clone();
    if let Some(text) = &style.annotation_text {
        layout.annotations.push(Annotation::source_note(text.clone()));
    }
    if style.x_title.is_some() {
        let axis = layout.xaxis.get_or_insert_with(AxisSpec::default);
        axis.title = style.x_title.clone().map(Title::new);
    }
    if style.y_title.is_some() || style.y_range.is_some() {
        let axis = layout.yaxis.get_or_insert_with(AxisSpec::default);
        axis.title = style.y_title.clone().map(Title::new);
        axis.range = style.y_range;
    }
}
