//! Options controlling a describe run.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a field that is present but not numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseErrorPolicy {
    /// Record `0.0` for the field and keep going. The zero counts as valid.
    #[default]
    ZeroFill,
    /// Leave the field out of the sample list entirely.
    Skip,
    /// Stop the run on the first unparsable field.
    Abort,
}

impl fmt::Display for ParseErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorPolicy::ZeroFill => "zero-fill",
            ParseErrorPolicy::Skip => "skip",
            ParseErrorPolicy::Abort => "abort",
        };
        f.write_str(name)
    }
}

/// How the final report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options for a single describe run over one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeOptions {
    /// Zero-based index of the tab-separated field to analyse.
    pub column: i64,
    pub on_parse_error: ParseErrorPolicy,
    pub format: OutputFormat,
}

impl DescribeOptions {
    pub fn for_column(column: i64) -> Self {
        Self {
            column,
            ..Self::default()
        }
    }
}
