//! Recoverable conditions found while describing a column.
//!
//! Each variant keeps the structured facts (indices, real line numbers) while
//! its `Display` output stays byte-compatible with the messages users of the
//! tool already grep for. In particular a missing field always reports
//! "line 1", whatever line it was found on.

use std::fmt;

/// A non-fatal problem encountered during extraction, parsing or reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The row has no field at `column`; the row was excluded.
    MissingField {
        column: i64,
        line_number: usize,
        source: String,
    },
    /// The field could not be read as a number.
    UnparsableValue { index: usize, raw: String },
    /// Nothing numeric survived, so no report could be produced.
    NoValidNumbers { column: i64, source: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingField { column, source, .. } => write!(
                f,
                "Exiting: There is no valid 'list index' in column {} in line 1 in file: {}",
                column, source
            ),
            Diagnostic::UnparsableValue { index, raw } => write!(
                f,
                "Skipping line number {} : could not convert string to float: {}",
                index, raw
            ),
            Diagnostic::NoValidNumbers { column, source } => write!(
                f,
                "Error: There were no valid number(s) in column {} in file: {}",
                column, source
            ),
        }
    }
}
