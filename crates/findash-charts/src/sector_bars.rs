//! Grouped bars of equal-weighted sector returns across horizons.

use findash_common::{FindashError, Result};
use findash_data::SecurityTable;
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle, SECTOR_BAR_PALETTE};
use crate::figure::{AxisSpec, BarTrace, ColorSpec, Figure, Layout, Marker, Trace};
use crate::traits::ChartBuilder;

/// One bar group per sector, one bar per requested return horizon
#[derive(Debug)]
pub struct SectorBarChart {
    /// Return horizons, one bar each
    pub horizons: Vec<String>,
    /// Horizon the sectors are ranked by
    pub sort_period: String,
}

impl Default for SectorBarChart {
    fn default() -> Self {
        Self {
            horizons: vec!["YTD".to_string(), "3M".to_string(), "2022".to_string()],
            sort_period: "YTD".to_string(),
        }
    }
}

impl ChartBuilder for SectorBarChart {
    type Input = SecurityTable;

    fn build(&self, table: &SecurityTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        layout.barmode = Some("group".to_string());
        layout.yaxis.get_or_insert_with(AxisSpec::default).tickformat = Some(".2%".to_string());

        if table.is_empty() {
            warn!("empty security table, emitting empty sector bars");
            figure.set_layout(layout);
            return Ok(figure);
        }

        let agg = table.group_by_sector(&self.sort_period)?;
        let sectors: Vec<String> = agg.rows.iter().map(|r| r.sector.clone()).collect();

        for (i, horizon) in self.horizons.iter().enumerate() {
            let idx = agg
                .periods
                .iter()
                .position(|p| p == horizon)
                .ok_or_else(|| FindashError::missing_column(horizon))?;

            let mut trace = BarTrace::new(
                sectors.clone(),
                agg.rows.iter().map(|r| r.returns[idx]).collect(),
            );
            trace.name = Some(horizon.clone());
            trace.marker = Some(Marker {
                color: Some(ColorSpec::Single(
                    SECTOR_BAR_PALETTE[i % SECTOR_BAR_PALETTE.len()].to_string(),
                )),
                ..Marker::default()
            });
            figure.add_trace(Trace::Bar(trace));
        }
        figure.set_layout(layout);

        debug!(
            sectors = sectors.len(),
            horizons = self.horizons.len(),
            "built sector bars figure"
        );
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle::equities("Sector EW returns")
    }

    fn name(&self) -> &'static str {
        "sector_bars"
    }

    fn description(&self) -> &'static str {
        "Equal-weighted sector returns, grouped bars per horizon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_table() -> SecurityTable {
        SecurityTable::new(
            vec!["AAPL".to_string(), "MSFT".to_string(), "XOM".to_string()],
            vec![
                "Information Technology".to_string(),
                "Information Technology".to_string(),
                "Energy".to_string(),
            ],
            vec![
                "Technology Hardware".to_string(),
                "Systems Software".to_string(),
                "Integrated Oil & Gas".to_string(),
            ],
            vec![0.07, 0.06, 0.012],
            vec![
                "YTD".to_string(),
                "3M".to_string(),
                "2022".to_string(),
            ],
            vec![
                vec![0.30, 0.25, -0.05],
                vec![0.10, 0.08, 0.02],
                vec![-0.28, -0.20, 0.60],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_one_bar_trace_per_horizon() {
        let figure = SectorBarChart::default().figure(&sample_table()).unwrap();
        assert_eq!(figure.data.len(), 3);
        assert_eq!(figure.layout.barmode.as_deref(), Some("group"));

        let Trace::Bar(ytd) = &figure.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(ytd.name.as_deref(), Some("YTD"));
        // Sorted descending by YTD: tech mean 0.275 ahead of energy -0.05
        assert_eq!(ytd.x, vec!["Information Technology", "Energy"]);
        assert_relative_eq!(ytd.y[0], 0.275);
    }

    #[test]
    fn test_missing_horizon_surfaces() {
        let chart = SectorBarChart {
            horizons: vec!["5Y".to_string()],
            sort_period: "YTD".to_string(),
        };
        assert!(chart.figure(&sample_table()).is_err());
    }

    #[test]
    fn test_tickformat() {
        let figure = SectorBarChart::default().figure(&sample_table()).unwrap();
        assert_eq!(
            figure.layout.yaxis.unwrap().tickformat.as_deref(),
            Some(".2%")
        );
    }

    #[test]
    fn test_empty_table() {
        let table = SecurityTable::new(vec![], vec![], vec![], vec![], vec![], vec![]).unwrap();
        let figure = SectorBarChart::default().figure(&table).unwrap();
        assert!(figure.data.is_empty());
    }
}
