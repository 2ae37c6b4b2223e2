// colstat/src/cli.rs
//! This file defines the command-line interface (CLI) for the colstat application.

use clap::{Parser, ValueEnum};
use colstat_core::{DescribeOptions, OutputFormat, ParseErrorPolicy};
use std::path::PathBuf;

/// Message for a run that did not get both positional arguments.
pub const MISSING_ARGS_MESSAGE: &str =
    "This script requires 2 arguments: a file name and a column number";

/// Top-level CLI definition.
///
/// The positionals are optional at the clap level so that a short command
/// line fails with [`MISSING_ARGS_MESSAGE`] rather than clap's usage error.
#[derive(Parser, Debug)]
#[command(
    name = "colstat",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Descriptive statistics for one column of a tab-delimited file",
    long_about = "colstat reads the given zero-based column (negative indices count from the end of the row) from every row of a tab-delimited text file and prints its count, valid count, average, maximum, minimum, sample variance, standard deviation and median. Rows without the column are skipped; non-numeric values are reported and, by default, counted as zero.",
)]
pub struct Cli {
    /// Tab-delimited input file.
    #[arg(value_name = "FILE", help = "Tab-delimited input file.")]
    pub file: Option<PathBuf>,

    /// Zero-based column to analyse. Negative values count from the end of each row.
    #[arg(
        value_name = "COLUMN",
        allow_negative_numbers = true,
        help = "Zero-based index of the column to analyse (negative counts from the end of the row)."
    )]
    pub column: Option<i64>,

    /// Anything after the first two positionals. Accepted and ignored.
    #[arg(value_name = "EXTRA", hide = true)]
    pub extra: Vec<String>,

    /// What to do with values that are not numbers.
    #[arg(
        long = "on-parse-error",
        value_name = "POLICY",
        env = "COLSTAT_ON_PARSE_ERROR",
        default_value = "zero-fill",
        help = "How to treat values that are not numbers."
    )]
    pub on_parse_error: ParseErrorChoice,

    /// Print the report as JSON.
    #[arg(long, help = "Print the report as JSON instead of the text block.")]
    pub json: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

/// Enum for selecting how unparsable values are handled.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ParseErrorChoice {
    /// Count the value as 0 (it stays in the valid samples).
    ZeroFill,
    /// Leave the row out of every statistic.
    Skip,
    /// Stop with an error.
    Abort,
}

impl From<ParseErrorChoice> for ParseErrorPolicy {
    fn from(choice: ParseErrorChoice) -> Self {
        match choice {
            ParseErrorChoice::ZeroFill => ParseErrorPolicy::ZeroFill,
            ParseErrorChoice::Skip => ParseErrorPolicy::Skip,
            ParseErrorChoice::Abort => ParseErrorPolicy::Abort,
        }
    }
}

impl Cli {
    /// Builds the core options for `column` from the flags.
    pub fn describe_options(&self, column: i64) -> DescribeOptions {
        DescribeOptions {
            column,
            on_parse_error: self.on_parse_error.into(),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from(["colstat", "data.tsv", "2", "--json", "--on-parse-error", "skip"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("data.tsv")));
        assert_eq!(cli.column, Some(2));

        let options = cli.describe_options(2);
        assert_eq!(options.column, 2);
        assert_eq!(options.on_parse_error, ParseErrorPolicy::Skip);
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn positionals_are_optional_for_clap() {
        let cli = Cli::try_parse_from(["colstat", "data.tsv"]).unwrap();
        assert_eq!(cli.column, None);
    }

    #[test]
    fn extra_positionals_are_collected() {
        let cli = Cli::try_parse_from(["colstat", "data.tsv", "0", "more", "args"]).unwrap();
        assert_eq!(cli.extra, vec!["more", "args"]);
    }

    #[test]
    fn negative_column_is_accepted() {
        let cli = Cli::try_parse_from(["colstat", "data.tsv", "-1"]).unwrap();
        assert_eq!(cli.column, Some(-1));
        assert!(cli.extra.is_empty());
    }

    #[test]
    fn non_integer_column_is_rejected() {
        assert!(Cli::try_parse_from(["colstat", "data.tsv", "first"]).is_err());
    }
}
