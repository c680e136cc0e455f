//! Index breakdown treemap, the sunburst's rectangular sibling.

use findash_common::Result;
use findash_data::SecurityTable;
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle};
use crate::figure::{ColorScale, Figure, Layout, Trace};
use crate::sunburst::hierarchy_trace;
use crate::traits::ChartBuilder;

/// Treemap of the index sized by weight and colored by period return
#[derive(Debug)]
pub struct TreemapChart {
    /// Return horizon used for coloring
    pub period: String,
}

impl Default for TreemapChart {
    fn default() -> Self {
        Self {
            period: "1M".to_string(),
        }
    }
}

impl ChartBuilder for TreemapChart {
    type Input = SecurityTable;

    fn build(&self, table: &SecurityTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        figure.set_layout(layout);

        if table.is_empty() {
            warn!("empty security table, emitting empty treemap figure");
            return Ok(figure);
        }

        let trace = hierarchy_trace(table, &self.period, style.colorscale.clone())?;
        figure.add_trace(Trace::Treemap(trace));

        debug!(securities = table.len(), period = %self.period, "built treemap figure");
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            colorscale: Some(ColorScale::red_white_green()),
            ..ChartStyle::equities(format!(
                "S&P 500 breakdown | Sector & industry - {}",
                self.period
            ))
        }
    }

    fn name(&self) -> &'static str {
        "index_treemap"
    }

    fn description(&self) -> &'static str {
        "Index breakdown by sector, sub-industry, and stock as a treemap"
    }
}
