// colstat/src/main.rs
//! colstat entry point.
//!
//! Parses arguments, sets up logging and runs the describe command.

use anyhow::{bail, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::warn;
use std::io;

use colstat::cli::{Cli, MISSING_ARGS_MESSAGE};
use colstat::logger;
use colstat::ui::theme::ThemeStyle;
use colstat::{run_describe, DescribeCommand};

fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    let (Some(input_file), Some(column)) = (args.file.clone(), args.column) else {
        bail!(MISSING_ARGS_MESSAGE);
    };
    if !args.extra.is_empty() {
        warn!("Ignoring extra arguments: {:?}", args.extra);
    }

    let command = DescribeCommand {
        input_file,
        options: args.describe_options(column),
    };
    let theme_map = ThemeStyle::default_theme_map();
    let stderr_supports_color = io::stderr().is_terminal();

    let stdout = io::stdout();
    run_describe(
        &command,
        &mut stdout.lock(),
        &mut io::stderr(),
        &theme_map,
        stderr_supports_color,
    )
}
