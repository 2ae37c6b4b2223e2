//! Rendering of a [`Report`] for stdout.
//!
//! The text layout is fixed: existing consumers split on `" = "` and count
//! the leading blank lines, so it must not change.

use anyhow::{Context, Result};
use colstat_core::Report;

/// Width the labels are left-aligned to.
const LABEL_WIDTH: usize = 8;
/// Decimal places for every value, counts included.
const PRECISION: usize = 3;

/// Renders the classic text block.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&"\n".repeat(5));
    out.push_str(&format!("Column: {}\n", report.column));
    out.push_str(&"\n".repeat(9));

    let rows = [
        ("Count", report.count as f64),
        ("ValidNum", report.valid_count as f64),
        ("Average", report.average),
        ("Maximum", report.maximum),
        ("Minimum", report.minimum),
        ("Variance", report.variance),
        ("Std Dev", report.std_dev),
        ("Median", report.median),
    ];
    for (label, value) in rows {
        out.push_str(&format!(
            "{:<width$} = {}\n",
            label,
            format_value(value),
            width = LABEL_WIDTH
        ));
    }
    out
}

/// Fixed-precision value, with non-finite values spelled `nan`, `inf` and `-inf`.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.prec$}", value, prec = PRECISION)
    }
}

/// Renders the report as pretty-printed JSON followed by a newline.
pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            column: 0,
            count: 3,
            valid_count: 3,
            average: 3.0,
            maximum: 5.0,
            minimum: 1.0,
            variance: 4.0,
            std_dev: 2.0,
            median: 3.0,
        }
    }

    #[test]
    fn text_layout_is_exact() {
        let expected = concat!(
            "\n\n\n\n\n",
            "Column: 0\n",
            "\n\n\n\n\n\n\n\n\n",
            "Count    = 3.000\n",
            "ValidNum = 3.000\n",
            "Average  = 3.000\n",
            "Maximum  = 5.000\n",
            "Minimum  = 1.000\n",
            "Variance = 4.000\n",
            "Std Dev  = 2.000\n",
            "Median   = 3.000\n",
        );
        assert_eq!(render_text(&sample_report()), expected);
    }

    #[test]
    fn values_round_to_three_places() {
        let report = Report {
            average: 2.0 / 3.0,
            ..sample_report()
        };
        assert!(render_text(&report).contains("Average  = 0.667\n"));
    }

    #[test]
    fn non_finite_values_use_lowercase_names() {
        let report = Report {
            average: f64::INFINITY,
            minimum: f64::NEG_INFINITY,
            variance: f64::NAN,
            std_dev: f64::NAN,
            ..sample_report()
        };
        let text = render_text(&report);
        assert!(text.contains("Average  = inf\n"));
        assert!(text.contains("Minimum  = -inf\n"));
        assert!(text.contains("Variance = nan\n"));
        assert!(text.contains("Std Dev  = nan\n"));
    }

    #[test]
    fn negative_column_header() {
        let report = Report {
            column: -1,
            ..sample_report()
        };
        assert!(render_text(&report).contains("\nColumn: -1\n"));
    }

    #[test]
    fn json_has_every_field() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["column"], 0);
        assert_eq!(value["count"], 3);
        assert_eq!(value["valid_count"], 3);
        assert_eq!(value["std_dev"], 2.0);
        assert_eq!(value["median"], 3.0);
    }
}
