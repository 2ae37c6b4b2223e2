//! Descriptive statistics report for one column.

use log::debug;
use serde::Serialize;

use colstat_stats::{self as stats, valid_samples, StatsError};

use crate::errors::Result;

/// Every figure printed for a column.
///
/// `count` includes zero-filled parse failures and NaNs; all other figures
/// are computed over the valid (non-NaN) samples only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub column: i64,
    pub count: usize,
    pub valid_count: usize,
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
}

impl Report {
    /// Builds the report for `samples`.
    ///
    /// Returns `Ok(None)` when no valid sample remains, so that callers can
    /// report that once instead of printing a partial report.
    pub fn compute(column: i64, samples: &[f64]) -> Result<Option<Report>> {
        let mut valid = valid_samples(samples);
        if valid.is_empty() {
            debug!("Column {} has no valid samples out of {}", column, samples.len());
            return Ok(None);
        }

        let average = stats::mean(&valid)?;
        let maximum = stats::max(&valid)?;
        let minimum = stats::min(&valid)?;
        let variance = zero_if_too_few(stats::variance(&valid))?;
        let std_dev = zero_if_too_few(stats::standard_deviation(&valid))?;
        let median = stats::median(&mut valid)?;

        Ok(Some(Report {
            column,
            count: samples.len(),
            valid_count: valid.len(),
            average,
            maximum,
            minimum,
            variance,
            std_dev,
            median,
        }))
    }
}

fn zero_if_too_few(result: std::result::Result<f64, StatsError>) -> Result<f64> {
    match result {
        Err(StatsError::TooFewSamples { .. }) => Ok(0.0),
        other => Ok(other?),
    }
}
