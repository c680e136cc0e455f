//! Monthly yield-curve replay chart.
//!
//! One animation frame per month; each frame plots the full curve with
//! the yield printed above each marker, shortest tenor first.

use findash_common::Result;
use findash_data::{RateTable, YieldPoint};
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle};
use crate::figure::{
    animation_controls, AxisData, Figure, Font, Frame, Layout, ScatterTrace, Trace,
};
use crate::traits::ChartBuilder;

/// Replay frame duration in milliseconds
const FRAME_DURATION_MS: u32 = 100;

/// Animated line chart of the yield curve, month by month
#[derive(Debug, Default)]
pub struct YieldCurveChart;

impl YieldCurveChart {
    fn curve_trace(points: &[YieldPoint]) -> Trace {
        let tenors = points.iter().map(|p| p.tenor.clone()).collect();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let labels = values.iter().map(|v| format!("{:.2}", v)).collect();

        let mut trace = ScatterTrace::new(AxisData::Categories(tenors), values);
        trace.mode = Some("markers+text".to_string());
        trace.text = Some(labels);
        trace.textposition = Some("top center".to_string());
        trace.textfont = Some(Font {
            family: Some("Arial".to_string()),
            size: Some(14),
        });
        Trace::Scatter(trace)
    }
}

impl ChartBuilder for YieldCurveChart {
    type Input = RateTable;

    fn build(&self, table: &RateTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);

        if table.is_empty() || table.tenors().is_empty() {
            warn!("empty rate table, emitting empty yield curve figure");
            figure.set_layout(layout);
            return Ok(figure);
        }

        let points = table.long_form();
        let months = table.month_labels();
        let per_month = table.tenors().len();

        // long_form is ordered date-major, so each month is one chunk
        for (month, chunk) in months.iter().zip(points.chunks(per_month)) {
            figure.frames.push(Frame {
                name: month.clone(),
                data: vec![Self::curve_trace(chunk)],
            });
        }
        // First month doubles as the resting trace
        figure.add_trace(Self::curve_trace(&points[..per_month]));

        let (updatemenus, sliders) = animation_controls(&months, FRAME_DURATION_MS);
        layout.updatemenus = updatemenus;
        layout.sliders = sliders;
        figure.set_layout(layout);

        debug!(months = months.len(), "built yield curve replay figure");
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            y_range: Some([0.0, 7.0]),
            ..ChartStyle::rates("Yield Curve Monthly Replay")
        }
    }

    fn name(&self) -> &'static str {
        "yield_curve_replay"
    }

    fn description(&self) -> &'static str {
        "Yield curve by tenor, animated month over month"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_table() -> RateTable {
        RateTable::new(
            vec![
                NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(),
            ],
            vec!["30Y".to_string(), "10Y".to_string(), "3M".to_string()],
            vec![vec![4.0, 3.8, 5.0], vec![4.0, 3.9, 5.1]],
        )
        .unwrap()
    }

    #[test]
    fn test_one_frame_per_month() {
        let figure = YieldCurveChart.figure(&sample_table()).unwrap();

        assert_eq!(figure.frames.len(), 2);
        assert_eq!(figure.frames[0].name, "2023-01");
        assert_eq!(figure.frames[1].name, "2023-02");
        assert_eq!(figure.data.len(), 1);
        assert_eq!(figure.layout.sliders[0].steps.len(), 2);
    }

    #[test]
    fn test_tenor_order_reversed() {
        let figure = YieldCurveChart.figure(&sample_table()).unwrap();

        let Trace::Scatter(trace) = &figure.data[0] else {
            panic!("expected scatter trace");
        };
        let AxisData::Categories(tenors) = &trace.x else {
            panic!("expected category axis");
        };
        assert_eq!(tenors, &["3M", "10Y", "30Y"]);
        assert_eq!(trace.y, vec![5.0, 3.8, 4.0]);
    }

    #[test]
    fn test_marker_text_labels() {
        let figure = YieldCurveChart.figure(&sample_table()).unwrap();

        let Trace::Scatter(trace) = &figure.data[0] else {
            panic!("expected scatter trace");
        };
        assert_eq!(trace.mode.as_deref(), Some("markers+text"));
        assert_eq!(trace.text.as_ref().unwrap()[0], "5.00");
    }

    #[test]
    fn test_empty_table_gives_empty_figure() {
        let table = RateTable::new(vec![], vec!["10Y".to_string()], vec![]).unwrap();
        let figure = YieldCurveChart.figure(&table).unwrap();

        assert!(figure.data.is_empty());
        assert!(figure.frames.is_empty());
        assert_eq!(figure.layout.height, Some(500));
    }

    #[test]
    fn test_default_style() {
        let style = YieldCurveChart.default_style();
        assert_eq!(style.y_range, Some([0.0, 7.0]));
        assert_eq!(style.title.as_deref(), Some("Yield Curve Monthly Replay"));
    }
}
