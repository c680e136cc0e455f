//! Equal-weighted sub-industry returns as a bubble scatter.

use findash_common::Result;
use findash_data::SecurityTable;
use tracing::{debug, warn};

use crate::config::{apply_style, area_size_ref, palette_color, ChartStyle, MARKER_OUTLINE};
use crate::figure::{
    AxisData, AxisSpec, ColorSpec, Figure, Layout, Line, Marker, ScatterTrace, SizeSpec, Trace,
};
use crate::traits::ChartBuilder;

/// Largest bubble diameter in pixels
const MAX_MARKER_PX: f64 = 20.0;

/// Sub-industry mean returns, one bubble per sub-industry sized by the
/// number of constituents, one trace (color) per sector.
#[derive(Debug)]
pub struct IndustryScatterChart {
    /// Return horizon plotted on y and used for sorting
    pub period: String,
}

impl Default for IndustryScatterChart {
    fn default() -> Self {
        Self {
            period: "1M".to_string(),
        }
    }
}

impl ChartBuilder for IndustryScatterChart {
    type Input = SecurityTable;

    fn build(&self, table: &SecurityTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        layout.yaxis.get_or_insert_with(AxisSpec::default).tickformat = Some(".0%".to_string());

        if table.is_empty() {
            warn!("empty security table, emitting empty industry scatter");
            figure.set_layout(layout);
            return Ok(figure);
        }

        let agg = table.group_by_industry(&self.period)?;
        let period_idx = agg
            .periods
            .iter()
            .position(|p| p == &self.period)
            .ok_or_else(|| findash_common::FindashError::missing_column(&self.period))?;

        let max_count = agg.rows.iter().map(|r| r.count).max().unwrap_or(1) as f64;
        let sizeref = area_size_ref(max_count, MAX_MARKER_PX);

        // One trace per sector, in order of appearance down the sorted rows
        let mut sectors: Vec<&str> = Vec::new();
        for row in &agg.rows {
            if !sectors.contains(&row.sector.as_str()) {
                sectors.push(&row.sector);
            }
        }

        for (i, sector) in sectors.iter().enumerate() {
            let rows: Vec<_> = agg.rows.iter().filter(|r| r.sector == **sector).collect();

            let x = rows.iter().map(|r| r.sub_industry.clone()).collect();
            let y = rows.iter().map(|r| r.returns[period_idx]).collect();
            let counts: Vec<f64> = rows.iter().map(|r| r.count as f64).collect();

            let mut trace = ScatterTrace::new(AxisData::Categories(x), y);
            trace.name = Some((*sector).to_string());
            trace.mode = Some("markers".to_string());
            trace.marker = Some(Marker {
                size: Some(SizeSpec::PerPoint(counts)),
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
                "%{{x}}<br>{}: %{{y:.2%}}<br>Count: %{{marker.size:.0f}}<extra>%{{fullData.name}}</extra>",
                self.period
            ));
            figure.add_trace(Trace::Scatter(trace));
        }
        figure.set_layout(layout);

        debug!(
            groups = agg.rows.len(),
            sectors = sectors.len(),
            period = %self.period,
            "built industry scatter figure"
        );
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            height: 800,
            ..ChartStyle::equities(format!("Industry EW returns - {}", self.period))
        }
    }

    fn name(&self) -> &'static str {
        "industry_scatter"
    }

    fn description(&self) -> &'static str {
        "Equal-weighted sub-industry returns, bubble size by constituent count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SecurityTable {
        SecurityTable::new(
            vec![
                "AAPL".to_string(),
                "MSFT".to_string(),
                "XOM".to_string(),
                "CVX".to_string(),
            ],
            vec![
                "Information Technology".to_string(),
                "Information Technology".to_string(),
                "Energy".to_string(),
                "Energy".to_string(),
            ],
            vec![
                "Technology Hardware".to_string(),
                "Systems Software".to_string(),
                "Integrated Oil & Gas".to_string(),
                "Integrated Oil & Gas".to_string(),
            ],
            vec![0.07, 0.06, 0.012, 0.009],
            vec!["1M".to_string()],
            vec![vec![0.02, -0.01, 0.03, 0.01]],
        )
        .unwrap()
    }

    #[test]
    fn test_one_trace_per_sector() {
        let figure = IndustryScatterChart::default()
            .figure(&sample_table())
            .unwrap();
        assert_eq!(figure.data.len(), 2);

        let Trace::Scatter(first) = &figure.data[0] else {
            panic!("expected scatter trace");
        };
        // Oil & Gas leads the sort (mean 0.02 == Technology Hardware 0.02,
        // but Oil & Gas appears later in input; ties keep first-seen group
        // order so Technology Hardware's sector comes first)
        assert_eq!(first.name.as_deref(), Some("Information Technology"));
    }

    #[test]
    fn test_bubble_sizes_are_counts() {
        let figure = IndustryScatterChart::default()
            .figure(&sample_table())
            .unwrap();

        let energy = figure
            .data
            .iter()
            .find_map(|t| match t {
                Trace::Scatter(s) if s.name.as_deref() == Some("Energy") => Some(s),
                _ => None,
            })
            .unwrap();
        let marker = energy.marker.as_ref().unwrap();
        let Some(SizeSpec::PerPoint(sizes)) = &marker.size else {
            panic!("expected per-point sizes");
        };
        assert_eq!(sizes, &[2.0]);
        assert_eq!(marker.sizemode.as_deref(), Some("area"));
    }

    #[test]
    fn test_percent_tickformat() {
        let figure = IndustryScatterChart::default()
            .figure(&sample_table())
            .unwrap();
        assert_eq!(
            figure.layout.yaxis.unwrap().tickformat.as_deref(),
            Some(".0%")
        );
    }

    #[test]
    fn test_default_height() {
        assert_eq!(IndustryScatterChart::default().default_style().height, 800);
    }

    #[test]
    fn test_empty_table() {
        let table = SecurityTable::new(vec![], vec![], vec![], vec![], vec![], vec![]).unwrap();
        let figure = IndustryScatterChart::default().figure(&table).unwrap();
        assert!(figure.data.is_empty());
    }
}
