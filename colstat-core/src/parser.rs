//! Conversion of raw field strings into numeric samples.

use log::debug;

use crate::diagnostics::Diagnostic;
use crate::errors::{ColstatError, Result};
use crate::options::ParseErrorPolicy;

/// Numeric samples for one column, with diagnostics for fields that failed to parse.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSamples {
    pub samples: Vec<f64>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a single field. Surrounding whitespace is ignored.
///
/// Accepts everything `f64::from_str` does, including `nan` and `inf`, plus
/// underscores used as digit-group separators (`1_000.5`).
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.contains('_') {
        return strip_digit_separators(trimmed)?.parse::<f64>().ok();
    }
    trimmed.parse::<f64>().ok()
}

/// Removes `_` separators, each of which must sit between two ASCII digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let between_digits = before.is_some_and(|b| b.is_ascii_digit())
            && after.is_some_and(|b| b.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }
    Some(text.replace('_', ""))
}

/// Parses every raw value, applying `policy` to the ones that are not numeric.
///
/// Under [`ParseErrorPolicy::ZeroFill`] the sample list has exactly one entry
/// per raw value.
pub fn parse_samples(raw_values: &[String], policy: ParseErrorPolicy) -> Result<ParsedSamples> {
    let mut parsed = ParsedSamples {
        samples: Vec::with_capacity(raw_values.len()),
        diagnostics: Vec::new(),
    };

    for (index, raw) in raw_values.iter().enumerate() {
        if let Some(value) = parse_value(raw) {
            parsed.samples.push(value);
            continue;
        }

        debug!("Value {:?} at index {} is not numeric ({})", raw, index, policy);
        match policy {
            ParseErrorPolicy::ZeroFill => parsed.samples.push(0.0),
            ParseErrorPolicy::Skip => {}
            ParseErrorPolicy::Abort => {
                return Err(ColstatError::UnparsableValue {
                    index,
                    raw: raw.clone(),
                })
            }
        }
        parsed.diagnostics.push(Diagnostic::UnparsableValue {
            index,
            raw: raw.clone(),
        });
    }

    Ok(parsed)
}
