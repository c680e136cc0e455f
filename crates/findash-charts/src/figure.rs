//! Declarative chart-specification model.
//!
//! A [`Figure`] is a plain data description of a chart (traces, layout,
//! animation frames) that serializes to Plotly figure-schema JSON. The
//! dashboard front end does the actual rendering; nothing in this crate
//! draws pixels.

use findash_common::Result;
use serde::Serialize;
use serde_json::{json, Value};

/// A complete chart specification: traces, layout, optional frames.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    /// Create an empty figure
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trace
    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    /// Replace the layout
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Serialize to Plotly figure-schema JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render a self-contained HTML snippet that plots this figure into
    /// a div, loading Plotly from its CDN.
    pub fn to_inline_html(&self, div_id: &str) -> Result<String> {
        let spec = serde_json::to_string(self)?;
        Ok(format!(
            concat!(
                "<div id=\"{id}\"></div>\n",
                "<script src=\"https://cdn.plot.ly/plotly-2.27.0.min.js\"></script>\n",
                "<script>\n",
                "var spec = {spec};\n",
                "Plotly.newPlot(\"{id}\", spec.data, spec.layout).then(function() {{\n",
                "  if (spec.frames) {{ Plotly.addFrames(\"{id}\", spec.frames); }}\n",
                "}});\n",
                "</script>"
            ),
            id = div_id,
            spec = spec
        ))
    }
}

/// One animation frame: a named snapshot of the figure's traces
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

/// A single plotted series, tagged with its Plotly trace type
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Surface(SurfaceTrace),
    Heatmap(HeatmapTrace),
    Sunburst(HierarchyTrace),
    Treemap(HierarchyTrace),
}

/// X-axis values: category labels or numbers
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AxisData {
    Categories(Vec<String>),
    Numbers(Vec<f64>),
}

/// Marker size: one value for every point, or per-point values
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Fixed(f64),
    PerPoint(Vec<f64>),
}

/// Marker color: a single CSS color, or per-point scalar values mapped
/// through the trace's colorscale
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<f64>),
}

/// A continuous colorscale, either named or as explicit stops
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorScale {
    Named(String),
    Stops(Vec<(f64, String)>),
}

impl ColorScale {
    /// Plotly's built-in red-blue diverging scale
    pub fn rdbu() -> Self {
        Self::Named("RdBu".to_string())
    }

    /// Blue-to-ember diverging scale for the yield heatmap
    pub fn icefire() -> Self {
        Self::Stops(vec![
            (0.0, "#9bd1e9".to_string()),
            (0.25, "#2a4b7c".to_string()),
            (0.5, "#0d0d0d".to_string()),
            (0.75, "#8c2a2a".to_string()),
            (1.0, "#f2c45f".to_string()),
        ])
    }

    /// Diverging loss/gain scale. Centered at zero via `cmid`, so a
    /// negative return always reads red and a positive one green.
    pub fn red_white_green() -> Self {
        Self::Stops(vec![
            (0.0, "red".to_string()),
            (0.5, "white".to_string()),
            (1.0, "green".to_string()),
        ])
    }
}

/// Line or marker-outline styling
#[derive(Debug, Clone, Default, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

/// Marker styling
#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

/// Scatter/line/area trace
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    pub x: AxisData,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl ScatterTrace {
    pub fn new(x: AxisData, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: None,
            mode: None,
            text: None,
            textposition: None,
            textfont: None,
            fill: None,
            marker: None,
            line: None,
            hovertemplate: None,
        }
    }
}

/// Bar trace
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl BarTrace {
    pub fn new(x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: None,
            marker: None,
            hovertemplate: None,
        }
    }
}

/// 3-D surface trace. `z` is row-major: one row per `y` entry.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceTrace {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub z: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectgaps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversescale: Option<bool>,
}

/// 2-D heatmap trace. `z` is row-major: one row per `y` entry.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapTrace {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub z: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
}

/// Sunburst/treemap trace over parent-pointer hierarchy arrays
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyTrace {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branchvalues: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Axis title or figure title
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    pub fn sized(text: impl Into<String>, size: u32) -> Self {
        Self {
            text: text.into(),
            font: Some(Font {
                family: None,
                size: Some(size),
            }),
        }
    }
}

/// Font styling
#[derive(Debug, Clone, Default, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Plot margins in pixels
#[derive(Debug, Clone, Default, Serialize)]
pub struct Margin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

impl Margin {
    /// Left/right margins only, as the equity charts use
    pub fn sides(l: u32, r: u32) -> Self {
        Self {
            l: Some(l),
            r: Some(r),
            t: None,
            b: None,
        }
    }
}

/// Free-floating text annotation in paper coordinates
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub showarrow: bool,
}

impl Annotation {
    /// The below-axis data-source note the rates charts carry
    pub fn source_note(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0.0,
            y: -0.15,
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            showarrow: false,
        }
    }
}

/// 2-D axis configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct AxisSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// A point or direction in scene coordinates
#[derive(Debug, Clone, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3-D camera position
#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    pub eye: Vec3,
}

/// 3-D scene configuration for surface plots
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zaxis: Option<AxisSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspectratio: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
}

/// Animation slider
#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<usize>,
    pub steps: Vec<SliderStep>,
}

/// One slider step; `args` is the raw Plotly animate argument blob
#[derive(Debug, Clone, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub method: String,
    pub args: Value,
}

/// Button menu (play/pause controls)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub menu_type: String,
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showactive: Option<bool>,
}

/// One menu button; `args` is the raw Plotly animate argument blob
#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub label: String,
    pub method: String,
    pub args: Value,
}

/// Chart layout: titles, sizing, axes, annotations, animation controls
#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

/// Build the play/pause menu and per-frame slider for an animated figure
pub fn animation_controls(
    frame_names: &[String],
    frame_duration_ms: u32,
) -> (Vec<UpdateMenu>, Vec<Slider>) {
    let play = Button {
        label: "Play".to_string(),
        method: "animate".to_string(),
        args: json!([
            null,
            {
                "frame": {"duration": frame_duration_ms, "redraw": true},
                "fromcurrent": true,
                "transition": {"duration": 0}
            }
        ]),
    };
    let pause = Button {
        label: "Pause".to_string(),
        method: "animate".to_string(),
        args: json!([[null], {"frame": {"duration": 0}, "mode": "immediate"}]),
    };
    let menu = UpdateMenu {
        menu_type: "buttons".to_string(),
        buttons: vec![play, pause],
        showactive: Some(false),
    };

    let steps = frame_names
        .iter()
        .map(|name| SliderStep {
            label: name.clone(),
            method: "animate".to_string(),
            args: json!([
                [name],
                {
                    "frame": {"duration": frame_duration_ms, "redraw": true},
                    "mode": "immediate",
                    "transition": {"duration": 0}
                }
            ]),
        })
        .collect();
    let slider = Slider {
        active: Some(0),
        steps,
    };

    (vec![menu], vec![slider])
}
