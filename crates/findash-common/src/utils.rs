//! Formatting helpers shared across the findash crates

use chrono::NaiveDate;

use crate::{FindashError, Result};

/// Format a date as the `YYYY-MM` month label used to key monthly series
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Format a fractional return for display, e.g. `0.0123` -> `"1.23%"`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Validate that a string is not empty after trimming
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FindashError::validation_field(
            format!("{} cannot be empty", field_name),
            field_name,
        ))
    } else {
        Ok(trimmed.to_string())
    }
}
