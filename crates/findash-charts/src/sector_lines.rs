//! Cumulative sector performance lines.

use findash_common::Result;
use findash_data::SectorCumulative;
use tracing::{debug, warn};

use crate::config::{apply_style, palette_color, ChartStyle};
use crate::figure::{AxisData, AxisSpec, Figure, Layout, Line, ScatterTrace, Trace};
use crate::traits::ChartBuilder;

/// One line per sector tracking cumulative equal-weighted growth
#[derive(Debug, Default)]
pub struct SectorLineChart;

impl ChartBuilder for SectorLineChart {
    type Input = SectorCumulative;

    fn build(&self, table: &SectorCumulative, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        layout.yaxis.get_or_insert_with(AxisSpec::default).tickformat = Some(".2f".to_string());

        if table.is_empty() {
            warn!("empty cumulative table, emitting empty sector lines");
            figure.set_layout(layout);
            return Ok(figure);
        }

        let dates: Vec<String> = table.dates().iter().map(|d| d.to_string()).collect();
        for (i, sector) in table.sectors().iter().enumerate() {
            let series = table.sector_series(sector)?;

            let mut trace =
                ScatterTrace::new(AxisData::Categories(dates.clone()), series.to_vec());
            trace.name = Some(sector.clone());
            trace.mode = Some("lines".to_string());
            trace.line = Some(Line {
                color: Some(palette_color(i).to_string()),
                ..Line::default()
            });
            figure.add_trace(Trace::Scatter(trace));
        }
        figure.set_layout(layout);

        debug!(sectors = table.sectors().len(), "built sector lines figure");
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle::equities("Cumulative growth | Sector EW - YTD")
    }

    fn name(&self) -> &'static str {
        "sector_lines"
    }

    fn description(&self) -> &'static str {
        "Cumulative equal-weighted growth per sector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_table() -> SectorCumulative {
        SectorCumulative::new(
            vec![
                NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(),
            ],
            vec!["Energy".to_string(), "Utilities".to_string()],
            vec![vec![1.0, 1.05], vec![1.0, 0.98]],
        )
        .unwrap()
    }

    #[test]
    fn test_one_line_per_sector() {
        let figure = SectorLineChart.figure(&sample_table()).unwrap();
        assert_eq!(figure.data.len(), 2);

        let Trace::Scatter(energy) = &figure.data[0] else {
            panic!("expected scatter trace");
        };
        assert_eq!(energy.name.as_deref(), Some("Energy"));
        assert_eq!(energy.y, vec![1.0, 1.05]);
        assert_eq!(energy.mode.as_deref(), Some("lines"));
    }

    #[test]
    fn test_palette_cycles_in_order() {
        let figure = SectorLineChart.figure(&sample_table()).unwrap();

        let Trace::Scatter(second) = &figure.data[1] else {
            panic!("expected scatter trace");
        };
        assert_eq!(
            second.line.as_ref().unwrap().color.as_deref(),
            Some(palette_color(1))
        );
    }

    #[test]
    fn test_empty_table() {
        let table = SectorCumulative::new(vec![], vec![], vec![]).unwrap();
        let figure = SectorLineChart.figure(&table).unwrap();
        assert!(figure.data.is_empty());
        assert_eq!(
            figure.layout.yaxis.unwrap().tickformat.as_deref(),
            Some(".2f")
        );
    }
}
