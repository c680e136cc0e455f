//! Tenor spread area chart.

use findash_common::Result;
use findash_data::RateTable;
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle};
use crate::figure::{AxisData, Figure, Layout, ScatterTrace, Trace};
use crate::traits::ChartBuilder;

/// Area chart of the spread between two curve tenors, in basis points
#[derive(Debug)]
pub struct SpreadChart {
    /// Long tenor of the spread
    pub long: String,
    /// Short tenor of the spread
    pub short: String,
}

impl Default for SpreadChart {
    fn default() -> Self {
        Self {
            long: "10Y".to_string(),
            short: "3M".to_string(),
        }
    }
}

impl ChartBuilder for SpreadChart {
    type Input = RateTable;

    fn build(&self, table: &RateTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        figure.set_layout(layout);

        if table.is_empty() {
            warn!("empty rate table, emitting empty spread figure");
            return Ok(figure);
        }

        let series = table.spread_bps(&self.long, &self.short)?;
        let dates = series.dates.iter().map(|d| d.to_string()).collect();

        let mut trace = ScatterTrace::new(AxisData::Categories(dates), series.values);
        trace.mode = Some("lines".to_string());
        trace.fill = Some("tozeroy".to_string());
        trace.name = Some(format!("{}-{}", self.long, self.short));
        figure.add_trace(Trace::Scatter(trace));

        debug!(
            long = %self.long,
            short = %self.short,
            "built spread figure"
        );
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            y_range: Some([-200.0, 400.0]),
            ..ChartStyle::rates(format!("{}-{} Spread in bps", self.long, self.short))
        }
    }

    fn name(&self) -> &'static str {
        "tenor_spread"
    }

    fn description(&self) -> &'static str {
        "Spread between two curve tenors over time, in basis points"
    }
}
