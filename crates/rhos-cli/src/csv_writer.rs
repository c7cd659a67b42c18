//! CSV output module for writing statistic results.
//!
//! The output has one row per input sample. If the input had a time column it
//! comes first, under its original header; the statistic follows under a
//! header naming the statistic and its parameters (e.g. `hos4_0.05_d0`).
//! NaN values are written as empty cells.
//!
//! Rows go through [`csv::Writer`], so time cells that contain the delimiter
//! or quotes are quoted and read back unchanged.

use std::fs::File;
use std::io::{self, Write};

use csv::Writer;

use crate::csv_parser::TimeColumn;
use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Destination for an optional `-o` argument.
    #[must_use]
    pub fn from_arg(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_string()))
    }

    /// Open the destination.
    ///
    /// The CSV writer buffers on its own, so the sink is returned unbuffered.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the output file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(file))
            }
        }
    }

    fn path(&self) -> Option<String> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path.clone()),
        }
    }
}

/// Text of one statistic cell.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write a statistic and the optional time column to any writer.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn write_statistic_to<W: Write>(
    writer: W,
    output: &[f64],
    header: &str,
    time: Option<&TimeColumn>,
) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    match time {
        Some(time) => csv_writer.write_record([time.header.as_str(), header])?,
        None => csv_writer.write_record([header])?,
    }

    for (i, &value) in output.iter().enumerate() {
        let cell = format_value(value);
        match time {
            Some(time) => {
                let stamp = time.values.get(i).map_or("", String::as_str);
                csv_writer.write_record([stamp, cell.as_str()])?;
            }
            None => csv_writer.write_record([cell.as_str()])?,
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a statistic to the given destination.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_statistic(
    output: &[f64],
    header: &str,
    time: Option<&TimeColumn>,
    dest: &OutputDest,
) -> Result<()> {
    let writer = dest.writer()?;
    write_statistic_to(writer, output, header, time).map_err(|err| match err {
        CliError::IoError { source, path: None } => CliError::IoError {
            source,
            path: dest.path(),
        },
        other => other,
    })
}
