// colstat/src/lib.rs
//! # colstat CLI Application
//!
//! Command-line front end for `colstat-core`: argument parsing, logging
//! setup, and rendering of reports and diagnostics.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::describe::{run_describe, DescribeCommand};
