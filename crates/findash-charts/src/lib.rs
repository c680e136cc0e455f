//! Chart specifications for the findash market dashboard.
//!
//! Each module turns one input table from `findash-data` into a
//! declarative [`Figure`] the dashboard front end renders. Builders are
//! pure and synchronous; styling lives in [`ChartStyle`] so the same
//! data can be restyled without touching the transform.

pub mod config;
pub mod figure;
pub mod hierarchy;
pub mod traits;

// Rates charts
pub mod heatmap;
pub mod spread;
pub mod surface;
pub mod yield_curve;

// Equity charts
pub mod industry_scatter;
pub mod sector_bars;
pub mod sector_lines;
pub mod stock_scatter;
pub mod sunburst;
pub mod treemap;

pub use config::{apply_style, ChartStyle};
pub use figure::{ColorScale, Figure, Frame, Layout, Trace};
pub use heatmap::HeatmapChart;
pub use industry_scatter::IndustryScatterChart;
pub use sector_bars::SectorBarChart;
pub use sector_lines::SectorLineChart;
pub use spread::SpreadChart;
pub use stock_scatter::StockScatterChart;
pub use sunburst::SunburstChart;
pub use surface::SurfaceChart;
pub use traits::ChartBuilder;
pub use treemap::TreemapChart;
pub use yield_curve::YieldCurveChart;
