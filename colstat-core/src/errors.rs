//! errors.rs - Custom error types for the colstat-core library.
//!
//! These are the fatal conditions of a describe run. Recoverable conditions
//! (missing fields, unparsable values, an empty valid sample list) are not
//! errors; they are reported as [`crate::diagnostics::Diagnostic`]s.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

use colstat_stats::StatsError;

/// This enum represents all possible fatal error types in the `colstat-core` library.
///
/// Marked `#[non_exhaustive]` so new variants are not a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ColstatError {
    #[error("Failed to read input file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line number {index} : could not convert string to float: {raw}")]
    UnparsableValue { index: usize, raw: String },

    #[error("Statistic could not be computed: {0}")]
    Stats(#[from] StatsError),
}

pub type Result<T> = std::result::Result<T, ColstatError>;
