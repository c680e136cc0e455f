//! Tabular data model for the findash dashboard
//!
//! Concrete, typed replacements for the loosely shaped frames the
//! dashboard consumes: a date-by-tenor rate matrix, a security-level
//! equity table, and a sector cumulative-performance table, together
//! with the reshaping and aggregation operations the chart builders
//! need.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod equities;
pub mod rates;

pub use equities::{
    IndustryAggregate, IndustryRow, SectorAggregate, SectorCumulative, SectorRow, SecurityTable,
};
pub use rates::{RateTable, SpreadSeries, YieldPoint};
