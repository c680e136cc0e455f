//! Interest-rate yield curve table and its reshaping operations

use chrono::NaiveDate;
use findash_common::{utils::month_label, FindashError, Result};
use serde::Serialize;
use tracing::debug;

/// One long-form yield observation: a single (date, tenor) cell of the
/// rate matrix, with the date collapsed to its `YYYY-MM` label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldPoint {
    /// Month label (`YYYY-MM`) used as the animation/category key
    pub month: String,
    /// Curve tenor, e.g. "3M" or "10Y"
    pub tenor: String,
    /// Yield in percent
    pub value: f64,
}

/// Per-date spread between two tenors, in basis points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadSeries {
    /// Long tenor of the spread, e.g. "10Y"
    pub long: String,
    /// Short tenor of the spread, e.g. "3M"
    pub short: String,
    /// Date index, aligned with `values`
    pub dates: Vec<NaiveDate>,
    /// (long - short) * 100 per date
    pub values: Vec<f64>,
}

/// Date-by-tenor matrix of yields.
///
/// Rows are dates (monthly), columns are tenors in the order supplied by
/// the data source, which is longest maturity first. Cells are yields in
/// percent.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    dates: Vec<NaiveDate>,
    tenors: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl RateTable {
    /// Build a rate table, validating that every row matches the tenor
    /// count and that the row count matches the date index.
    pub fn new(dates: Vec<NaiveDate>, tenors: Vec<String>, values: Vec<Vec<f64>>) -> Result<Self> {
        if values.len() != dates.len() {
            return Err(FindashError::shape_mismatch(format!(
                "{} value rows vs {} dates",
                values.len(),
                dates.len()
            )));
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != tenors.len() {
                return Err(FindashError::shape_mismatch(format!(
                    "row {} has {} values vs {} tenors",
                    i,
                    row.len(),
                    tenors.len()
                )));
            }
        }
        Ok(Self {
            dates,
            tenors,
            values,
        })
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date index
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Tenor columns, in stored (longest-first) order
    pub fn tenors(&self) -> &[String] {
        &self.tenors
    }

    /// Yield rows, one per date, aligned with `tenors()`
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// `YYYY-MM` labels for the date index
    pub fn month_labels(&self) -> Vec<String> {
        self.dates.iter().map(|d| month_label(*d)).collect()
    }

    /// Yields transposed to one row per tenor, aligned with `tenors()`.
    ///
    /// The heatmap wants tenors on the vertical axis and dates on the
    /// horizontal one, the opposite orientation of the surface plot, so
    /// the transposition is explicit here rather than left to the
    /// renderer.
    pub fn column_major(&self) -> Vec<Vec<f64>> {
        self.tenors
            .iter()
            .enumerate()
            .map(|(col, _)| self.values.iter().map(|row| row[col]).collect())
            .collect()
    }

    /// Yield column for a single tenor
    pub fn tenor_series(&self, tenor: &str) -> Result<Vec<f64>> {
        let col = self
            .tenors
            .iter()
            .position(|t| t == tenor)
            .ok_or_else(|| FindashError::missing_column(tenor))?;
        Ok(self.values.iter().map(|row| row[col]).collect())
    }

    /// Unpivot to long form for the monthly replay chart.
    ///
    /// Column order is reversed first so the output runs shortest tenor
    /// to longest within each date. Output cardinality is exactly
    /// rows x columns of the input; a single-column table still yields
    /// one observation per date.
    pub fn long_form(&self) -> Vec<YieldPoint> {
        let mut points = Vec::with_capacity(self.dates.len() * self.tenors.len());
        for (date, row) in self.dates.iter().zip(&self.values) {
            let month = month_label(*date);
            for (tenor, value) in self.tenors.iter().zip(row.iter()).rev() {
                points.push(YieldPoint {
                    month: month.clone(),
                    tenor: tenor.clone(),
                    value: *value,
                });
            }
        }
        debug!(
            points = points.len(),
            "melted rate table to long form"
        );
        points
    }

    /// Per-date spread between two tenors, in basis points.
    ///
    /// Fails with `MissingColumn` if either tenor is absent. The table
    /// itself is never modified; the series is a fresh allocation.
    pub fn spread_bps(&self, long: &str, short: &str) -> Result<SpreadSeries> {
        let long_series = self.tenor_series(long)?;
        let short_series = self.tenor_series(short)?;
        let values = long_series
            .iter()
            .zip(&short_series)
            .map(|(l, s)| (l - s) * 100.0)
            .collect();
        Ok(SpreadSeries {
            long: long.to_string(),
            short: short.to_string(),
            dates: self.dates.clone(),
            values,
        })
    }
}
