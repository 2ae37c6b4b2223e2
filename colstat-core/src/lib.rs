// colstat-core/src/lib.rs
//! # colstat Core Library
//!
//! `colstat-core` provides the platform-independent logic behind the `colstat`
//! CLI: pulling one column out of tab-delimited text, turning its fields into
//! numbers, and computing a descriptive statistics [`Report`] over them.
//!
//! The library does no printing. Recoverable problems are returned as
//! [`Diagnostic`]s next to the data; fatal ones as [`ColstatError`].
//!
//! ## Modules
//!
//! * `extractor`: Reads rows and selects the field at a column index.
//! * `parser`: Converts raw fields to `f64` under a [`ParseErrorPolicy`].
//! * `report`: Computes count, valid count, mean, extremes, spread and median.
//! * `describe`: The one-shot pipeline tying the stages together.
//! * `diagnostics`: Recoverable conditions and their user-facing messages.
//! * `options`: [`DescribeOptions`] and its policy/format enums.
//! * `errors`: The fatal error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use colstat_core::{describe_reader, DescribeOptions};
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let input = "1.0\t2.0\n3.0\t4.0\n5.0\t6.0";
//! let options = DescribeOptions::for_column(0);
//! let description = describe_reader(Cursor::new(input), Path::new("inline.tsv"), &options).unwrap();
//!
//! let report = description.report.unwrap();
//! assert_eq!(report.count, 3);
//! assert_eq!(report.median, 3.0);
//! assert_eq!(report.variance, 4.0);
//! ```

pub mod describe;
pub mod diagnostics;
pub mod errors;
pub mod extractor;
pub mod options;
pub mod parser;
pub mod report;

pub use describe::{describe_file, describe_reader, Description};
pub use diagnostics::Diagnostic;
pub use errors::ColstatError;
pub use options::{DescribeOptions, OutputFormat, ParseErrorPolicy};
pub use report::Report;
