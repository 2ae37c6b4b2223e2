//! Column extraction from tab-delimited text.
//!
//! Rows are read one at a time and the field at the requested index is kept
//! as a raw string. Rows that are too short for the column produce a
//! [`Diagnostic::MissingField`] and are excluded without a placeholder.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::diagnostics::Diagnostic;
use crate::errors::{ColstatError, Result};

/// Field separator within a row.
pub const FIELD_SEPARATOR: char = '\t';

/// Raw field values for one column plus what went wrong along the way.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub raw_values: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Extracts `column` from every row of the file at `path`.
///
/// The file handle is dropped before returning on every path.
pub fn extract_column_from_path(path: &Path, column: i64) -> Result<Extraction> {
    let file = File::open(path).map_err(|source| ColstatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_column(BufReader::new(file), column, path)
}

/// Extracts `column` from every row of `reader`.
///
/// A negative `column` counts from the end of each row, so `-1` is the last
/// field. Rows end at `\n`, `\r\n` or a lone `\r`. `path` only labels
/// diagnostics and errors.
pub fn extract_column<R: BufRead>(mut reader: R, column: i64, path: &Path) -> Result<Extraction> {
    let source = path.display().to_string();
    let mut extraction = Extraction::default();
    let mut chunk = String::new();
    let mut line_number = 0;

    loop {
        chunk.clear();
        let read = reader.read_line(&mut chunk).map_err(|source| ColstatError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }

        for line in split_rows(&chunk) {
            line_number += 1;
            match select_field(line, column) {
                Some(field) => extraction.raw_values.push(field.to_string()),
                None => {
                    debug!(
                        "Line {} of '{}' has no field at column {}",
                        line_number, source, column
                    );
                    extraction.diagnostics.push(Diagnostic::MissingField {
                        column,
                        line_number,
                        source: source.clone(),
                    });
                }
            }
        }
    }

    debug!(
        "Extracted {} value(s) from column {} of '{}' ({} row(s) missing the column)",
        extraction.raw_values.len(),
        column,
        source,
        extraction.diagnostics.len()
    );
    Ok(extraction)
}

/// Returns the field at `column`, resolving negative indices against the row length.
pub fn select_field(line: &str, column: i64) -> Option<&str> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let index = if column < 0 {
        fields.len() as i64 + column
    } else {
        column
    };
    usize::try_from(index).ok().and_then(|i| fields.get(i).copied())
}

/// Splits one `read_line` chunk into rows on `\r`, after removing its
/// `\n` or `\r\n` terminator.
fn split_rows(chunk: &str) -> Vec<&str> {
    let (body, terminated) = match chunk.strip_suffix('\n') {
        Some(body) => (body.strip_suffix('\r').unwrap_or(body), true),
        None => (chunk, false),
    };
    let mut rows: Vec<&str> = body.split('\r').collect();
    // A trailing `\r` at end of input closes the last row; it does not open one.
    if !terminated && body.ends_with('\r') {
        rows.pop();
    }
    rows
}
