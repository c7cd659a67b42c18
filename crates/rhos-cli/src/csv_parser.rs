//! CSV parsing module for reading a signal from a CSV file.
//!
//! The input is a CSV file with a header row. One column holds the signal;
//! an optional time column is carried through to the output.
//!
//! # Column Detection
//!
//! Headers are matched case-insensitively. Unless a column is named
//! explicitly, the signal column is the first of:
//! - `signal`, `value`, `data`, `amplitude`, `counts`
//! - the only column whose cells all parse as numbers
//!
//! Time columns (`time`, `timestamp`, `date`, `datetime`, `t`) are preserved
//! for output alignment but never picked as the signal.
//!
//! Empty cells in the signal column are read as NaN.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{CliError, ColumnProblem, Result};

/// Header names recognised as the signal, in order of preference.
const SIGNAL_HEADERS: &[&str] = &["signal", "value", "data", "amplitude", "counts"];

/// Header names recognised as the time axis.
const TIME_HEADERS: &[&str] = &["time", "timestamp", "date", "datetime", "t"];

/// Parsed CSV contents, kept as text until a column is selected.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Cell text by column index.
    pub cells: Vec<Vec<String>>,
    /// Number of rows parsed.
    pub row_count: usize,
}

/// The time column carried through to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeColumn {
    /// Original header text.
    pub header: String,
    /// Cell text, one per row.
    pub values: Vec<String>,
}

/// A signal extracted from a CSV file.
#[derive(Debug, Clone)]
pub struct Signal {
    /// Header of the column the samples came from.
    pub name: String,
    /// The samples.
    pub samples: Vec<f64>,
    /// The time column, if the file has one.
    pub time: Option<TimeColumn>,
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a time column.
fn is_time_column(header: &str) -> bool {
    TIME_HEADERS.contains(&normalize_header(header).as_str())
}

/// Parse a cell as a sample, treating empty as NaN.
fn parse_value(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(f64::NAN)
    } else {
        trimmed.parse::<f64>().ok()
    }
}

impl ParsedCsv {
    /// Index of the column with the given header (case-insensitive).
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|h| normalize_header(h) == wanted)
    }

    /// The first time column, if any.
    #[must_use]
    pub fn time_column(&self) -> Option<TimeColumn> {
        let idx = self.headers.iter().position(|h| is_time_column(h))?;
        Some(TimeColumn {
            header: self.headers[idx].clone(),
            values: self.cells[idx].clone(),
        })
    }

    fn is_numeric_column(&self, idx: usize) -> bool {
        self.cells[idx].iter().all(|cell| parse_value(cell).is_some())
    }

    /// Pick the signal column: the requested one, or an auto-detected one.
    ///
    /// # Errors
    ///
    /// Returns `CliError::SignalColumn` if a requested column does not
    /// exist, or if no single column can be detected.
    pub fn signal_index(&self, requested: Option<&str>) -> Result<usize> {
        if let Some(name) = requested {
            return self.column_index(name).ok_or_else(|| {
                self.column_error(ColumnProblem::NotFound {
                    requested: name.to_string(),
                })
            });
        }

        if let Some(idx) = SIGNAL_HEADERS.iter().find_map(|h| self.column_index(h)) {
            return Ok(idx);
        }

        let numeric: Vec<usize> = (0..self.headers.len())
            .filter(|&idx| !is_time_column(&self.headers[idx]) && self.is_numeric_column(idx))
            .collect();
        match numeric.as_slice() {
            [only] => Ok(*only),
            [] => Err(self.column_error(ColumnProblem::NoNumericColumn)),
            _ => Err(self.column_error(ColumnProblem::Ambiguous {
                candidates: numeric.iter().map(|&idx| self.headers[idx].clone()).collect(),
            })),
        }
    }

    fn column_error(&self, problem: ColumnProblem) -> CliError {
        CliError::SignalColumn {
            problem,
            available: self.headers.clone(),
        }
    }

    /// Extract the signal and the time column.
    ///
    /// # Errors
    ///
    /// Returns an error if no signal column can be selected or a cell of the
    /// selected column is not a number.
    pub fn signal(&self, requested: Option<&str>) -> Result<Signal> {
        let idx = self.signal_index(requested)?;
        let samples = self.cells[idx]
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                parse_value(cell).ok_or_else(|| CliError::InvalidSample {
                    column: self.headers[idx].clone(),
                    value: cell.trim().to_string(),
                    line: row + 2, // +2 for header and 0-indexing
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let missing = samples.iter().filter(|v| v.is_nan()).count();
        if missing > 0 {
            warn!(
                column = %self.headers[idx],
                missing,
                "signal has empty cells; the running statistics are NaN from the first one on"
            );
        }
        debug!(column = %self.headers[idx], samples = samples.len(), "selected signal column");

        Ok(Signal {
            name: self.headers[idx].clone(),
            samples,
            time: self.time_column(),
        })
    }
}

/// Parse a CSV file.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_csv_from_reader(BufReader::new(file))
}

/// Parse CSV data from a reader.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the CSV is malformed or has no header.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0;
    for (line_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line_idx + 2),
        })?;
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(idx).unwrap_or("").to_string());
        }
        row_count += 1;
    }

    Ok(ParsedCsv {
        headers,
        cells,
        row_count,
    })
}

/// Parse a CSV file and extract its signal in one step.
///
/// # Errors
///
/// See [`parse_csv`] and [`ParsedCsv::signal`].
pub fn read_signal<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Signal> {
    parse_csv(path)?.signal(column)
}
