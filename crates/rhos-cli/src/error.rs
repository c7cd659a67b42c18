//! CLI error types.
//!
//! [`CliError`] covers everything that can stop a run: the input file, the
//! CSV layout, picking the signal column, parsing samples, the statistic
//! itself and bad arguments. Messages name the file, line or column involved
//! and, where there is an obvious fix, say what to pass instead.

use std::fmt;
use std::io;

/// Why a signal column could not be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnProblem {
    /// `--column` named a column the file does not have.
    NotFound {
        /// The name given on the command line.
        requested: String,
    },
    /// No column is named like a signal and none holds only numbers.
    NoNumericColumn,
    /// More than one numeric column could be the signal.
    Ambiguous {
        /// Headers of the candidate columns.
        candidates: Vec<String>,
    },
}

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// The CSV structure itself is malformed.
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },
    /// The signal column could not be selected.
    SignalColumn {
        /// What went wrong.
        problem: ColumnProblem,
        /// Every header in the file, for the hint.
        available: Vec<String>,
    },
    /// A cell of the signal column is not a number.
    InvalidSample {
        /// Header of the signal column.
        column: String,
        /// The offending cell text.
        value: String,
        /// 1-based line number in the file, header included.
        line: usize,
    },
    /// The statistic rejected its arguments.
    StatisticError {
        /// The underlying rhos error.
        source: rhos::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl fmt::Display for ColumnProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { requested } => write!(f, "no column named '{requested}'"),
            Self::NoNumericColumn => write!(f, "no numeric signal column found"),
            Self::Ambiguous { candidates } => write!(
                f,
                "several numeric columns ({}); cannot tell which one is the signal",
                candidates.join(", ")
            ),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError { source, path } => match path {
                Some(p) => write!(f, "cannot access '{p}': {source}"),
                None => write!(f, "I/O error: {source}"),
            },
            Self::CsvParseError { message, line } => match line {
                Some(l) => write!(f, "malformed CSV on line {l}: {message}"),
                None => write!(f, "malformed CSV: {message}"),
            },
            Self::SignalColumn { problem, available } => {
                write!(f, "{problem}. Available columns: {}", available.join(", "))?;
                if !matches!(problem, ColumnProblem::NotFound { .. }) {
                    write!(f, ". Pick the signal with --column")?;
                }
                Ok(())
            }
            Self::InvalidSample {
                column,
                value,
                line,
            } => write!(
                f,
                "cannot parse '{value}' as a number in column '{column}' on line {line}"
            ),
            Self::StatisticError { source } => write!(f, "{source}"),
            Self::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::StatisticError { source } => Some(source),
            Self::CsvParseError { .. }
            | Self::SignalColumn { .. }
            | Self::InvalidSample { .. }
            | Self::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<rhos::Error> for CliError {
    fn from(err: rhos::Error) -> Self {
        Self::StatisticError { source: err }
    }
}

/// I/O failures inside the csv crate (e.g. a closed stdout) stay I/O errors.
impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        let line = err
            .position()
            .and_then(|p| usize::try_from(p.line()).ok());
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::IoError { source, path: None },
            _ => Self::CsvParseError { message, line },
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["time".to_string(), "HHE".to_string(), "HHZ".to_string()]
    }

    #[test]
    fn test_display_io_error() {
        let with_path = CliError::IoError {
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
            path: Some("/path/to/trace.csv".to_string()),
        };
        assert_eq!(
            format!("{with_path}"),
            "cannot access '/path/to/trace.csv': file not found"
        );

        let bare = CliError::IoError {
            source: io::Error::other("broken pipe"),
            path: None,
        };
        assert_eq!(format!("{bare}"), "I/O error: broken pipe");
    }

    #[test]
    fn test_display_csv_parse_error() {
        let err = CliError::CsvParseError {
            message: "found record with 3 fields".to_string(),
            line: Some(7),
        };
        assert_eq!(
            format!("{err}"),
            "malformed CSV on line 7: found record with 3 fields"
        );
    }

    #[test]
    fn test_display_signal_column_not_found() {
        let err = CliError::SignalColumn {
            problem: ColumnProblem::NotFound {
                requested: "HHN".to_string(),
            },
            available: headers(),
        };
        assert_eq!(
            format!("{err}"),
            "no column named 'HHN'. Available columns: time, HHE, HHZ"
        );
    }

    #[test]
    fn test_display_signal_column_ambiguous() {
        let err = CliError::SignalColumn {
            problem: ColumnProblem::Ambiguous {
                candidates: vec!["HHE".to_string(), "HHZ".to_string()],
            },
            available: headers(),
        };
        let display = format!("{err}");
        assert!(display.starts_with("several numeric columns (HHE, HHZ)"));
        assert!(display.ends_with("Pick the signal with --column"));
    }

    #[test]
    fn test_display_invalid_sample() {
        let err = CliError::InvalidSample {
            column: "signal".to_string(),
            value: "abc".to_string(),
            line: 4,
        };
        assert_eq!(
            format!("{err}"),
            "cannot parse 'abc' as a number in column 'signal' on line 4"
        );
    }

    #[test]
    fn test_display_statistic_error() {
        let err = CliError::from(rhos::Error::InvalidDecay { value: 2.0 });
        assert_eq!(format!("{err}"), format!("{}", rhos::Error::InvalidDecay { value: 2.0 }));
        assert!(format!("{err}").contains("[0, 1]"));
    }

    #[test]
    fn test_display_invalid_argument() {
        let err = CliError::InvalidArgument {
            argument: "definition".to_string(),
            reason: "unknown definition 'x'".to_string(),
            suggestion: Some("Use 0 (prior mean) or 1 (current mean)".to_string()),
        };
        let display = format!("{err}");
        assert!(display.contains("'definition'"));
        assert!(display.ends_with("Use 0 (prior mean) or 1 (current mean)"));
    }

    #[test]
    fn test_error_sources() {
        use std::error::Error;

        let io_err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(io_err.source().is_some());

        let stat_err = CliError::from(rhos::Error::EmptyInput);
        assert!(stat_err.source().is_some());

        let column_err = CliError::SignalColumn {
            problem: ColumnProblem::NoNumericColumn,
            available: headers(),
        };
        assert!(column_err.source().is_none());
    }

    #[test]
    fn test_from_csv_record_error() {
        let result: std::result::Result<csv::StringRecord, csv::Error> = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\n1,2,3".as_bytes())
            .records()
            .last()
            .unwrap();

        let cli_err: CliError = result.unwrap_err().into();
        assert!(matches!(cli_err, CliError::CsvParseError { line: Some(_), .. }));
    }

    #[test]
    fn test_from_csv_io_error() {
        let csv_err = csv::Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        let cli_err: CliError = csv_err.into();
        assert!(matches!(cli_err, CliError::IoError { path: None, .. }));
    }
}
