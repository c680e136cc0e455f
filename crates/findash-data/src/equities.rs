//! Equity index constituent table and sector/industry rollups

use std::collections::HashMap;

use chrono::NaiveDate;
use findash_common::{FindashError, Result};
use tracing::debug;

/// Security-level constituent table for an equity index.
///
/// Stored column-wise: the identity columns (security, sector,
/// sub-industry, weight) are row-aligned vectors, and each return
/// horizon ("1M", "YTD", ...) is one more row-aligned column. Weights
/// are portfolio fractions and returns are fractional, not
/// pre-multiplied by 100.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityTable {
    securities: Vec<String>,
    sectors: Vec<String>,
    sub_industries: Vec<String>,
    weights: Vec<f64>,
    periods: Vec<String>,
    returns: Vec<Vec<f64>>,
}

/// One row of the (Sub-Industry, Sector) rollup
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryRow {
    /// Sub-industry label (the grouping key together with `sector`)
    pub sub_industry: String,
    /// Sector the sub-industry rolled up under
    pub sector: String,
    /// Mean portfolio weight of the group's securities
    pub weight: f64,
    /// Number of securities rolled up into this row
    pub count: usize,
    /// Mean return per horizon, aligned with the aggregate's `periods`
    pub returns: Vec<f64>,
}

/// Equal-weighted rollup of securities by (Sub-Industry, Sector)
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryAggregate {
    /// Return horizons, in the source table's column order
    pub periods: Vec<String>,
    /// One row per distinct (Sub-Industry, Sector) pair, sorted
    /// descending by the selected period's mean return
    pub rows: Vec<IndustryRow>,
}

/// One row of the sector-only rollup
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRow {
    /// Sector label
    pub sector: String,
    /// Mean return per horizon, aligned with the aggregate's `periods`
    pub returns: Vec<f64>,
}

/// Equal-weighted rollup of securities by Sector (no count column)
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAggregate {
    /// Return horizons, in the source table's column order
    pub periods: Vec<String>,
    /// One row per sector, sorted descending by the reference period
    pub rows: Vec<SectorRow>,
}

impl SecurityTable {
    /// Build a security table, validating row alignment across all
    /// columns and that weights are non-negative.
    pub fn new(
        securities: Vec<String>,
        sectors: Vec<String>,
        sub_industries: Vec<String>,
        weights: Vec<f64>,
        periods: Vec<String>,
        returns: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let n = securities.len();
        if sectors.len() != n || sub_industries.len() != n || weights.len() != n {
            return Err(FindashError::shape_mismatch(format!(
                "identity columns disagree: {} securities, {} sectors, {} sub-industries, {} weights",
                n,
                sectors.len(),
                sub_industries.len(),
                weights.len()
            )));
        }
        if returns.len() != periods.len() {
            return Err(FindashError::shape_mismatch(format!(
                "{} return columns vs {} period labels",
                returns.len(),
                periods.len()
            )));
        }
        for (period, column) in periods.iter().zip(&returns) {
            if column.len() != n {
                return Err(FindashError::shape_mismatch(format!(
                    "period {} has {} values vs {} rows",
                    period,
                    column.len(),
                    n
                )));
            }
        }
        if let Some(idx) = weights.iter().position(|w| *w < 0.0) {
            return Err(FindashError::validation_field(
                format!("negative weight for {}", securities[idx]),
                "Weight",
            ));
        }
        Ok(Self {
            securities,
            sectors,
            sub_industries,
            weights,
            periods,
            returns,
        })
    }

    /// Number of securities
    pub fn len(&self) -> usize {
        self.securities.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }

    /// Security names
    pub fn securities(&self) -> &[String] {
        &self.securities
    }

    /// Sector per security
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// Sub-industry per security
    pub fn sub_industries(&self) -> &[String] {
        &self.sub_industries
    }

    /// Portfolio weight per security
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Return horizons, in column order
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// Return column for one horizon
    pub fn period_returns(&self, period: &str) -> Result<&[f64]> {
        let idx = self
            .periods
            .iter()
            .position(|p| p == period)
            .ok_or_else(|| FindashError::missing_column(period))?;
        Ok(&self.returns[idx])
    }

    /// Distinct sector labels, in first-seen row order
    pub fn distinct_sectors(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for sector in &self.sectors {
            if !seen.iter().any(|s| s == sector) {
                seen.push(sector.clone());
            }
        }
        seen
    }

    /// Roll securities up by (Sub-Industry, Sector).
    ///
    /// Per group: arithmetic mean of weight and of every return column,
    /// plus the member count. Rows come back sorted descending by the
    /// selected period's mean; ties keep first-seen group order (the
    /// sort is stable). A sub-industry appearing under two sectors forms
    /// two distinct groups.
    pub fn group_by_industry(&self, period: &str) -> Result<IndustryAggregate> {
        let period_idx = self
            .periods
            .iter()
            .position(|p| p == period)
            .ok_or_else(|| FindashError::missing_column(period))?;

        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut rows: Vec<IndustryRow> = Vec::new();

        for i in 0..self.len() {
            let key = (self.sub_industries[i].clone(), self.sectors[i].clone());
            let row_idx = *index.entry(key).or_insert_with(|| {
                rows.push(IndustryRow {
                    sub_industry: self.sub_industries[i].clone(),
                    sector: self.sectors[i].clone(),
                    weight: 0.0,
                    count: 0,
                    returns: vec![0.0; self.periods.len()],
                });
                rows.len() - 1
            });

            let row = &mut rows[row_idx];
            row.weight += self.weights[i];
            row.count += 1;
            for (sum, column) in row.returns.iter_mut().zip(&self.returns) {
                *sum += column[i];
            }
        }

        for row in &mut rows {
            let count = row.count as f64;
            row.weight /= count;
            for sum in &mut row.returns {
                *sum /= count;
            }
        }

        rows.sort_by(|a, b| b.returns[period_idx].total_cmp(&a.returns[period_idx]));

        debug!(
            groups = rows.len(),
            securities = self.len(),
            period,
            "aggregated securities by sub-industry"
        );
        Ok(IndustryAggregate {
            periods: self.periods.clone(),
            rows,
        })
    }

    /// Roll securities up by Sector only.
    ///
    /// Per sector: arithmetic mean of every return column, sorted
    /// descending by the reference period. No count column is attached.
    pub fn group_by_sector(&self, sort_period: &str) -> Result<SectorAggregate> {
        let period_idx = self
            .periods
            .iter()
            .position(|p| p == sort_period)
            .ok_or_else(|| FindashError::missing_column(sort_period))?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<SectorRow> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();

        for i in 0..self.len() {
            let row_idx = *index.entry(self.sectors[i].clone()).or_insert_with(|| {
                rows.push(SectorRow {
                    sector: self.sectors[i].clone(),
                    returns: vec![0.0; self.periods.len()],
                });
                counts.push(0);
                rows.len() - 1
            });

            counts[row_idx] += 1;
            for (sum, column) in rows[row_idx].returns.iter_mut().zip(&self.returns) {
                *sum += column[i];
            }
        }

        for (row, count) in rows.iter_mut().zip(&counts) {
            for sum in &mut row.returns {
                *sum /= *count as f64;
            }
        }

        rows.sort_by(|a, b| b.returns[period_idx].total_cmp(&a.returns[period_idx]));

        debug!(sectors = rows.len(), "aggregated securities by sector");
        Ok(SectorAggregate {
            periods: self.periods.clone(),
            rows,
        })
    }
}

/// Date-indexed cumulative growth per sector.
///
/// One column per sector, each cell the cumulative growth of the
/// equal-weighted sector basket since the start of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCumulative {
    dates: Vec<NaiveDate>,
    sectors: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl SectorCumulative {
    /// Build the table, validating column alignment.
    pub fn new(
        dates: Vec<NaiveDate>,
        sectors: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if values.len() != sectors.len() {
            return Err(FindashError::shape_mismatch(format!(
                "{} value columns vs {} sectors",
                values.len(),
                sectors.len()
            )));
        }
        for (sector, column) in sectors.iter().zip(&values) {
            if column.len() != dates.len() {
                return Err(FindashError::shape_mismatch(format!(
                    "sector {} has {} values vs {} dates",
                    sector,
                    column.len(),
                    dates.len()
                )));
            }
        }
        Ok(Self {
            dates,
            sectors,
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

    /// Sector column labels
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// Cumulative growth column for one sector, aligned with `dates()`
    pub fn sector_series(&self, sector: &str) -> Result<&[f64]> {
        let idx = self
            .sectors
            .iter()
            .position(|s| s == sector)
            .ok_or_else(|| FindashError::missing_column(sector))?;
        Ok(&self.values[idx])
    }
}
