//! End-to-end tests building every dashboard figure from realistic
//! tables and checking the serialized Plotly JSON.

use chrono::NaiveDate;
use findash_charts::{
    ChartBuilder, HeatmapChart, IndustryScatterChart, SectorBarChart, SectorLineChart,
    SpreadChart, StockScatterChart, SunburstChart, SurfaceChart, TreemapChart, YieldCurveChart,
};
use findash_data::{RateTable, SectorCumulative, SecurityTable};
use serde_json::Value;

fn rate_table() -> RateTable {
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

fn security_table() -> SecurityTable {
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
        vec!["1M".to_string(), "YTD".to_string(), "2022".to_string()],
        vec![
            vec![0.02, -0.01, 0.03, 0.01],
            vec![0.30, 0.25, -0.05, -0.02],
            vec![-0.28, -0.20, 0.60, 0.55],
        ],
    )
    .unwrap()
}

fn figure_json(figure: &findash_charts::Figure) -> Value {
    serde_json::from_str(&figure.to_json().unwrap()).unwrap()
}

#[test]
fn yield_curve_replay_spec() {
    let figure = YieldCurveChart.figure(&rate_table()).unwrap();
    let json = figure_json(&figure);

    assert_eq!(json["frames"].as_array().unwrap().len(), 2);
    assert_eq!(json["frames"][0]["name"], "2023-01");
    // Resting trace runs shortest tenor first
    assert_eq!(json["data"][0]["x"][0], "3M");
    assert_eq!(json["data"][0]["x"][2], "30Y");
    assert_eq!(json["layout"]["yaxis"]["range"][1], 7.0);
    assert_eq!(
        json["layout"]["annotations"][0]["text"],
        "Data Source: FRED - Federal Reserve Economic Data"
    );
}

#[test]
fn surface_and_heatmap_are_transposed() {
    let table = rate_table();

    let surface = figure_json(&SurfaceChart.figure(&table).unwrap());
    let heatmap = figure_json(&HeatmapChart.figure(&table).unwrap());

    // Surface: dates on y, one z row per date
    assert_eq!(surface["data"][0]["y"][0], "2023-01");
    assert_eq!(surface["data"][0]["z"].as_array().unwrap().len(), 2);

    // Heatmap: dates on x, one z row per tenor
    assert_eq!(heatmap["data"][0]["x"][0], "2023-01");
    assert_eq!(heatmap["data"][0]["z"].as_array().unwrap().len(), 3);

    // Same cell, both orientations: Feb 3M yield
    assert_eq!(surface["data"][0]["z"][1][2], 5.1);
    assert_eq!(heatmap["data"][0]["z"][2][1], 5.1);
}

#[test]
fn spread_end_to_end_example() {
    // 10Y-3M over two dates: (3.8-5.0)*100 and (3.9-5.1)*100
    let figure = SpreadChart::default().figure(&rate_table()).unwrap();
    let json = figure_json(&figure);

    for value in json["data"][0]["y"].as_array().unwrap() {
        assert!((value.as_f64().unwrap() + 120.0).abs() < 1e-9);
    }
    assert_eq!(json["layout"]["title"]["text"], "10Y-3M Spread in bps");
}

#[test]
fn sunburst_passthrough_and_centering() {
    let table = security_table();
    let figure = SunburstChart::default().figure(&table).unwrap();
    let json = figure_json(&figure);

    let labels = json["data"][0]["labels"].as_array().unwrap();
    for security in table.securities() {
        assert!(
            labels.iter().any(|l| l == security.as_str()),
            "{} missing from sunburst",
            security
        );
    }
    assert_eq!(json["data"][0]["type"], "sunburst");
    assert_eq!(json["data"][0]["marker"]["cmid"], 0.0);
    assert_eq!(json["data"][0]["marker"]["colorscale"][1][1], "white");
}

#[test]
fn treemap_shares_hierarchy_with_sunburst() {
    let table = security_table();
    let sunburst = figure_json(&SunburstChart::default().figure(&table).unwrap());
    let treemap = figure_json(&TreemapChart::default().figure(&table).unwrap());

    assert_eq!(treemap["data"][0]["type"], "treemap");
    assert_eq!(sunburst["data"][0]["ids"], treemap["data"][0]["ids"]);
    assert_eq!(sunburst["data"][0]["values"], treemap["data"][0]["values"]);
}

#[test]
fn industry_scatter_aggregates_and_sorts() {
    let figure = IndustryScatterChart::default()
        .figure(&security_table())
        .unwrap();
    let json = figure_json(&figure);

    // 4 securities roll up into 3 sub-industry groups across 2 traces
    let traces = json["data"].as_array().unwrap();
    assert_eq!(traces.len(), 2);
    let total_points: usize = traces
        .iter()
        .map(|t| t["x"].as_array().unwrap().len())
        .sum();
    assert_eq!(total_points, 3);
    assert_eq!(json["layout"]["yaxis"]["tickformat"], ".0%");
    assert_eq!(json["layout"]["height"], 800);
}

#[test]
fn sector_bars_grouped_and_sorted() {
    let figure = SectorBarChart::default().figure(&security_table()).unwrap();
    let json = figure_json(&figure);

    assert_eq!(json["layout"]["barmode"], "group");
    let traces = json["data"].as_array().unwrap();
    assert_eq!(traces.len(), 3);
    // Ranked by YTD: tech first
    assert_eq!(traces[0]["x"][0], "Information Technology");
    assert_eq!(traces[0]["name"], "YTD");
}

#[test]
fn stock_scatter_keeps_every_security() {
    let table = security_table();
    let figure = StockScatterChart::default().figure(&table).unwrap();
    let json = figure_json(&figure);

    let total_points: usize = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["y"].as_array().unwrap().len())
        .sum();
    assert_eq!(total_points, table.len());
}

#[test]
fn sector_lines_one_trace_per_sector() {
    let table = SectorCumulative::new(
        vec![
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(),
        ],
        vec!["Energy".to_string(), "Utilities".to_string()],
        vec![vec![1.0, 1.05], vec![1.0, 0.98]],
    )
    .unwrap();

    let figure = SectorLineChart.figure(&table).unwrap();
    let json = figure_json(&figure);

    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"][0]["name"], "Energy");
    assert_eq!(json["layout"]["yaxis"]["tickformat"], ".2f");
}

#[test]
fn empty_tables_build_empty_figures() {
    let rates = RateTable::new(vec![], vec!["10Y".to_string(), "3M".to_string()], vec![]).unwrap();
    let securities = SecurityTable::new(vec![], vec![], vec![], vec![], vec![], vec![]).unwrap();

    for figure in [
        YieldCurveChart.figure(&rates).unwrap(),
        SurfaceChart.figure(&rates).unwrap(),
        SpreadChart::default().figure(&rates).unwrap(),
        HeatmapChart.figure(&rates).unwrap(),
        SunburstChart::default().figure(&securities).unwrap(),
        TreemapChart::default().figure(&securities).unwrap(),
        IndustryScatterChart::default().figure(&securities).unwrap(),
        SectorBarChart::default().figure(&securities).unwrap(),
        StockScatterChart::default().figure(&securities).unwrap(),
    ] {
        assert!(figure.data.is_empty());
        assert!(figure.layout.height.is_some());
    }
}
