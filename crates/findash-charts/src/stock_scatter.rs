//! Security-level return scatter, one bubble per stock.

use findash_common::Result;
use findash_data::SecurityTable;
use tracing::{debug, warn};

use crate::config::{apply_style, area_size_ref, palette_color, ChartStyle, MARKER_OUTLINE};
use crate::figure::{
    AxisData, AxisSpec, ColorSpec, Figure, Layout, Line, Marker, ScatterTrace, SizeSpec, Trace,
};
use crate::traits::ChartBuilder;

/// Largest bubble diameter in pixels
const MAX_MARKER_PX: f64 = 40.0;

/// Stock returns across two horizons, bubbles sized by index weight and
/// colored by sector
#[derive(Debug)]
pub struct StockScatterChart {
    /// Return horizon on the x axis
    pub x_period: String,
    /// Return horizon on the y axis
    pub y_period: String,
}

impl Default for StockScatterChart {
    fn default() -> Self {
        Self {
            x_period: "2022".to_string(),
            y_period: "YTD".to_string(),
        }
    }
}

impl ChartBuilder for StockScatterChart {
    type Input = SecurityTable;

    fn build(&self, table: &SecurityTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        layout.xaxis.get_or_insert_with(AxisSpec::default).tickformat = Some(".0%".to_string());
        layout.yaxis.get_or_insert_with(AxisSpec::default).tickformat = Some(".0%".to_string());

        if table.is_empty() {
            warn!("empty security table, emitting empty stock scatter");
            figure.set_layout(layout);
            return Ok(figure);
        }

        let x_returns = table.period_returns(&self.x_period)?;
        let y_returns = table.period_returns(&self.y_period)?;

        let max_weight = table.weights().iter().copied().fold(0.0, f64::max);
        let sizeref = area_size_ref(max_weight, MAX_MARKER_PX);

        for (i, sector) in table.distinct_sectors().iter().enumerate() {
            let rows: Vec<usize> = (0..table.len())
                .filter(|&r| &table.sectors()[r] == sector)
                .collect();

            let x = rows.iter().map(|&r| x_returns[r]).collect();
            let y = rows.iter().map(|&r| y_returns[r]).collect();
            let weights = rows.iter().map(|&r| table.weights()[r]).collect();
            let names = rows
                .iter()
                .map(|&r| table.securities()[r].clone())
                .collect();

            let mut trace = ScatterTrace::new(AxisData::Numbers(x), y);
            trace.name = Some(sector.clone());
            trace.mode = Some("markers".to_string());
            trace.text = Some(names);
            trace.marker = Some(Marker {
                size: Some(SizeSpec::PerPoint(weights)),
                sizemode: Some("area".to_string()),
                sizeref: Some(sizeref),
                color: Some(ColorSpec::Single(palette_color(i).to_string())),
                line: Some(Line {
                    width: Some(0.5),
                    color: Some(MARKER_OUTLINE.to_string()),
                    dash: None,
                }),
                ..Marker::default()
            });
            trace.hovertemplate = Some(format!(
                "%{{text}}<br>{}: %{{x:.2%}}<br>{}: %{{y:.2%}}<extra>%{{fullData.name}}</extra>",
                self.x_period, self.y_period
            ));
            figure.add_trace(Trace::Scatter(trace));
        }
        figure.set_layout(layout);

        debug!(securities = table.len(), "built stock scatter figure");
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle::equities(format!(
            "Stock returns - {} vs {}",
            self.y_period, self.x_period
        ))
    }

    fn name(&self) -> &'static str {
        "stock_scatter"
    }

    fn description(&self) -> &'static str {
        "Per-stock returns across two horizons, sized by index weight"
    }
}
