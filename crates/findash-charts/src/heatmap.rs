//! Yield heatmap: months across, tenors down.

use findash_common::Result;
use findash_data::RateTable;
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle};
use crate::figure::{ColorScale, Figure, HeatmapTrace, Layout, Trace};
use crate::traits::ChartBuilder;

/// Heatmap of yields per month per tenor.
///
/// Orientation is the transpose of the surface plot: dates run along x
/// and tenors down y, so the z grid is column-major relative to the
/// stored table.
#[derive(Debug, Default)]
pub struct HeatmapChart;

impl ChartBuilder for HeatmapChart {
    type Input = RateTable;

    fn build(&self, table: &RateTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        figure.set_layout(layout);

        if table.is_empty() {
            warn!("empty rate table, emitting empty heatmap figure");
            return Ok(figure);
        }

        figure.add_trace(Trace::Heatmap(HeatmapTrace {
            x: table.month_labels(),
            y: table.tenors().to_vec(),
            z: table.column_major(),
            colorscale: style.colorscale.clone(),
        }));

        debug!(
            dates = table.dates().len(),
            tenors = table.tenors().len(),
            "built yield heatmap figure"
        );
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            colorscale: Some(ColorScale::icefire()),
            ..ChartStyle::rates("Yield Curve Heatmap")
        }
    }

    fn name(&self) -> &'static str {
        "yield_heatmap"
    }

    fn description(&self) -> &'static str {
        "Yields per month per tenor as a heatmap"
    }
}
