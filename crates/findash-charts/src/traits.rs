//! Chart builder trait shared by every dashboard chart.

use findash_common::Result;

use crate::{ChartStyle, Figure};

/// A stateless transform from one input table to one chart specification.
///
/// Builders are synchronous pure functions of their input plus a
/// [`ChartStyle`]; they never mutate the input and allocate a fresh
/// [`Figure`] per call, so callers may fan out across charts freely.
pub trait ChartBuilder {
    /// The table shape this builder consumes
    type Input;

    /// Build the chart specification for the given input and style
    fn build(&self, input: &Self::Input, style: &ChartStyle) -> Result<Figure>;

    /// The house style this chart ships with on the dashboard
    fn default_style(&self) -> ChartStyle;

    /// Build with the default style
    fn figure(&self, input: &Self::Input) -> Result<Figure> {
        self.build(input, &self.default_style())
    }

    /// Short identifier for this chart type
    fn name(&self) -> &'static str;

    /// Human-readable description of this chart type
    fn description(&self) -> &'static str;
}
