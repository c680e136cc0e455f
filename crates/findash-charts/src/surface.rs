//! 3-D surface of the yield curve's history.

use findash_common::Result;
use findash_data::RateTable;
use tracing::{debug, warn};

use crate::config::{apply_style, ChartStyle};
use crate::figure::{
    AxisSpec, Camera, ColorScale, Figure, Layout, Margin, Scene, SurfaceTrace, Title, Trace, Vec3,
};
use crate::traits::ChartBuilder;

/// Surface plot: maturity across, dates into the scene, yield up
#[derive(Debug, Default)]
pub struct SurfaceChart;

impl SurfaceChart {
    fn scene() -> Scene {
        Scene {
            xaxis: Some(AxisSpec {
                title: Some(Title::new("Maturity")),
                ..AxisSpec::default()
            }),
            yaxis: Some(AxisSpec {
                title: Some(Title::new("Date")),
                ..AxisSpec::default()
            }),
            zaxis: Some(AxisSpec {
                title: Some(Title::new("Yield in %")),
                ..AxisSpec::default()
            }),
            aspectratio: Some(Vec3 {
                x: 1.0,
                y: 2.2,
                z: 1.0,
            }),
            camera: Some(Camera {
                eye: Vec3 {
                    x: 2.0,
                    y: 0.4,
                    z: 0.8,
                },
            }),
        }
    }
}

impl ChartBuilder for SurfaceChart {
    type Input = RateTable;

    fn build(&self, table: &RateTable, style: &ChartStyle) -> Result<Figure> {
        let mut figure = Figure::new();
        let mut layout = Layout::default();
        apply_style(&mut layout, style);
        layout.hovermode = Some("closest".to_string());
        layout.scene = Some(Self::scene());

        if table.is_empty() {
            warn!("empty rate table, emitting empty surface figure");
            figure.set_layout(layout);
            return Ok(figure);
        }

        // Surface orientation: one z row per date, matching the y axis.
        figure.add_trace(Trace::Surface(SurfaceTrace {
            x: table.tenors().to_vec(),
            y: table.month_labels(),
            z: table.rows().to_vec(),
            colorscale: style.colorscale.clone(),
            opacity: Some(0.9),
            connectgaps: Some(true),
            showscale: Some(true),
            reversescale: Some(true),
        }));
        figure.set_layout(layout);

        debug!(
            dates = table.dates().len(),
            tenors = table.tenors().len(),
            "built yield surface figure"
        );
        Ok(figure)
    }

    fn default_style(&self) -> ChartStyle {
        ChartStyle {
            colorscale: Some(ColorScale::rdbu()),
            margin: Some(Margin {
                t: Some(40),
                ..Margin::default()
            }),
            ..ChartStyle::rates("Yield Curve Historical Evolution")
        }
    }

    fn name(&self) -> &'static str {
        "yield_surface"
    }

    fn description(&self) -> &'static str {
        "Historical evolution of the yield curve as a 3-D surface"
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
    fn test_surface_orientation() {
        let figure = SurfaceChart.figure(&sample_table()).unwrap();

        let Trace::Surface(trace) = &figure.data[0] else {
            panic!("expected surface trace");
        };
        // Rows of z align with dates on y; columns with tenors on x
        assert_eq!(trace.x, vec!["30Y", "10Y", "3M"]);
        assert_eq!(trace.y, vec!["2023-01", "2023-02"]);
        assert_eq!(trace.z.len(), 2);
        assert_eq!(trace.z[0].len(), 3);
        assert_eq!(trace.z[1][2], 5.1);
    }

    #[test]
    fn test_scene_configuration() {
        let figure = SurfaceChart.figure(&sample_table()).unwrap();
        let scene = figure.layout.scene.unwrap();

        assert_eq!(scene.zaxis.unwrap().title.unwrap().text, "Yield in %");
        let ratio = scene.aspectratio.unwrap();
        assert_eq!(ratio.y, 2.2);
        assert_eq!(scene.camera.unwrap().eye.x, 2.0);
    }

    #[test]
    fn test_reversed_diverging_scale() {
        let figure = SurfaceChart.figure(&sample_table()).unwrap();

        let Trace::Surface(trace) = &figure.data[0] else {
            panic!("expected surface trace");
        };
        assert_eq!(trace.colorscale, Some(ColorScale::rdbu()));
        assert_eq!(trace.reversescale, Some(true));
    }

    #[test]
    fn test_empty_table() {
        let table = RateTable::new(vec![], vec![], vec![]).unwrap();
        let figure = SurfaceChart.figure(&table).unwrap();
        assert!(figure.data.is_empty());
        assert!(figure.layout.scene.is_some());
    }
}
