// colstat-stats/src/error/mod.rs
use core::fmt;

/// Reasons a statistic cannot be computed for a given sample slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The slice holds no values at all.
    Empty,
    /// The statistic needs more values than were supplied.
    TooFewSamples { needed: usize, found: usize },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Empty => f.write_str("no samples to compute a statistic over"),
            StatsError::TooFewSamples { needed, found } => write!(
                f,
                "statistic needs at least {} samples, found {}",
                needed, found
            ),
        }
    }
}

impl core::error::Error for StatsError {}
