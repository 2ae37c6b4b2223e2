#![no_std]

extern crate alloc;

pub mod error;
pub mod samples;
pub mod statistics;

pub use error::StatsError;
pub use samples::valid_samples;
pub use statistics::{max, mean, median, min, standard_deviation, variance};
