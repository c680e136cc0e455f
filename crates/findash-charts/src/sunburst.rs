//! Index breakdown sunburst: sector rings, sub-industry rings, stocks.

use findash_common::Result;
use findash_data::SecurityTable;
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle};
use crate::figure::{ColorScale, ColorSpec, Figure, HierarchyTrace, Layout, Marker, Trace};
use crate::hierarchy::build_hierarchy;
use crate::traits::ChartBuilder;

/// Sunburst of the index sized by weight and colored by period return
#[derive(Debug)]
pub struct SunburstChart {
    /// Return horizon used for coloring
    pub period: String,
}

impl Default for SunburstChart {
    fn default() -> Self {
        Self {
            period: "1M".to_string(),
        }
    }
}

pub(crate) fn hierarchy_trace(
    table: &SecurityTable,
    period: &str,
    colorscale: Option<ColorScale>,
) -> Result<HierarchyTrace> {
    let nodes = build_hierarchy(table, period)?;
    Ok(HierarchyTrace {
        ids: nodes.ids,
        labels: nodes.labels,
        parents: nodes.parents,
        values: nodes.values,
        branchvalues: Some("total".to_string()),
        marker: Some(Marker {
            color: Some(ColorSpec::PerPoint(nodes.colors)),
            colorscale,
            // Zero return must sit at the neutral midpoint so losses and
            // gains read at a glance.
            cmid: Some(0.0),
            ..Marker::default()
        }),
        hovertemplate: Some(format!(
            "%{{label}}<br>Weight: %{{value:.2%}}<br>{}: %{{color:.2%}}<extra></extra>",
            period
        )),
    })
}

impl ChartBuilder for SunburstChart {
    type Input = SecurityTable;

    fn build(&self, table: &SecurityTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        figure.set_layout(layout);

        if table.is_empty() {
            warn!("empty security table, emitting empty sunburst figure");
            return Ok(figure);
        }

        let trace = hierarchy_trace(table, &self.period, style.colorscale.clone())?;
        figure.add_trace(Trace::Sunburst(trace));

        debug!(securities = table.len(), period = %self.period, "built sunburst figure");
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            colorscale: Some(ColorScale::red_white_green()),
            ..ChartStyle::equities(format!(
                "S&P 500 Breakdown | sector & industry - {}",
                self.period
            ))
        }
    }

    fn name(&self) -> &'static str {
        "index_sunburst"
    }

    fn description(&self) -> &'static str {
        "Index breakdown by sector, sub-industry, and stock"
    }
}
