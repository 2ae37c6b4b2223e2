// File: colstat-core/src/describe.rs

//! One-shot describe pipeline: extract, parse, report.
//!
//! Diagnostics from every stage are collected in processing order so the
//! caller can print them before the report.

use log::info;
use std::io::BufRead;
use std::path::Path;

use crate::diagnostics::Diagnostic;
use crate::errors::Result;
use crate::extractor::{extract_column, extract_column_from_path, Extraction};
use crate::options::DescribeOptions;
use crate::parser::parse_samples;
use crate::report::Report;

/// Outcome of describing one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    /// All parsed samples, including zero-filled failures and NaNs.
    pub samples: Vec<f64>,
    /// `None` when the column had no valid numbers.
    pub report: Option<Report>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Describes the configured column of the file at `path`.
pub fn describe_file(path: &Path, options: &DescribeOptions) -> Result<Description> {
    info!("Describing column {} of '{}'", options.column, path.display());
    let extraction = extract_column_from_path(path, options.column)?;
    describe_extraction(extraction, path, options)
}

/// Describes the configured column of an already opened reader.
pub fn describe_reader<R: BufRead>(
    reader: R,
    path: &Path,
    options: &DescribeOptions,
) -> Result<Description> {
    let extraction = extract_column(reader, options.column, path)?;
    describe_extraction(extraction, path, options)
}

fn describe_extraction(
    extraction: Extraction,
    path: &Path,
    options: &DescribeOptions,
) -> Result<Description> {
    let Extraction {
        raw_values,
        mut diagnostics,
    } = extraction;

    let parsed = parse_samples(&raw_values, options.on_parse_error)?;
    diagnostics.extend(parsed.diagnostics);

    let report = Report::compute(options.column, &parsed.samples)?;
    if report.is_none() {
        diagnostics.push(Diagnostic::NoValidNumbers {
            column: options.column,
            source: path.display().to_string(),
        });
    }

    info!(
        "Column {} described: {} sample(s), {} diagnostic(s)",
        options.column,
        parsed.samples.len(),
        diagnostics.len()
    );
    Ok(Description {
        samples: parsed.samples,
        report,
        diagnostics,
    })
}
