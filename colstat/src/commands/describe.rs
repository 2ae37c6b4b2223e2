//! Describe command implementation: statistics for one column of a file.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use colstat_core::{describe_file, DescribeOptions, OutputFormat};

use crate::ui::output_format::print_diagnostic;
use crate::ui::report_format::{render_json, render_text};
use crate::ui::theme::ThemeMap;

/// Everything the describe command needs to run.
pub struct DescribeCommand {
    pub input_file: PathBuf,
    pub options: DescribeOptions,
}

/// Runs one describe operation.
///
/// Diagnostics are written to `diagnostics` in processing order, then the
/// report (if any) to `out`. A column with no valid numbers is not an error.
pub fn run_describe<O: Write, E: Write>(
    command: &DescribeCommand,
    out: &mut O,
    diagnostics: &mut E,
    theme_map: &ThemeMap,
    diagnostics_color: bool,
) -> Result<()> {
    info!("Starting describe operation.");

    let description = describe_file(&command.input_file, &command.options).with_context(|| {
        format!(
            "Failed to describe column {} of {}",
            command.options.column,
            command.input_file.display()
        )
    })?;

    for diagnostic in &description.diagnostics {
        print_diagnostic(diagnostics, diagnostic, theme_map, diagnostics_color)
            .context("Failed to write diagnostic")?;
    }

    match &description.report {
        Some(report) => {
            debug!("Rendering report as {:?}", command.options.format);
            let rendered = match command.options.format {
                OutputFormat::Text => render_text(report),
                OutputFormat::Json => render_json(report)?,
            };
            out.write_all(rendered.as_bytes())
                .context("Failed to write report")?;
            out.flush()?;
        }
        None => debug!("No report to render."),
    }

    info!("Describe operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn run(content: &str, options: DescribeOptions) -> (String, String) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let command = DescribeCommand {
            input_file: file.path().to_path_buf(),
            options,
        };

        let mut out = Vec::new();
        let mut err = Vec::new();
        run_describe(&command, &mut out, &mut err, &ThemeStyle::default_theme_map(), false).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn diagnostics_and_report_go_to_separate_writers() {
        let (out, err) = run("1\t2\n3\n5\t6\n", DescribeOptions::for_column(1));
        assert!(out.contains("Count    = 2.000\n"));
        assert!(out.contains("Average  = 4.000\n"));
        assert!(err.starts_with("Exiting: There is no valid 'list index' in column 1 in line 1 in file: "));
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn no_valid_numbers_prints_only_the_diagnostic() {
        let (out, err) = run("1\n2\n", DescribeOptions::for_column(3));
        assert!(out.is_empty());
        let last = err.lines().last().unwrap();
        assert!(last.starts_with("Error: There were no valid number(s) in column 3 in file: "));
        assert_eq!(err.matches("Error: There were no valid").count(), 1);
    }

    #[test]
    fn json_format() {
        let options = DescribeOptions {
            format: OutputFormat::Json,
            ..DescribeOptions::for_column(0)
        };
        let (out, _) = run("2\n4\n", options);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["average"], 3.0);
        assert_eq!(value["variance"], 2.0);
    }
}
