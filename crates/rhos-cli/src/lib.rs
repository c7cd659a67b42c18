//! rhos CLI library
//!
//! This module exposes the CLI components for testing and reuse.

pub mod args;
pub mod csv_parser;
pub mod csv_writer;
pub mod error;
pub mod logging;
pub mod runner;

pub use error::{CliError, ColumnProblem, Result};
pub use runner::{compute, run, StatisticOutput};
