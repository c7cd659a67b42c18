//! CLI argument parsing module.
//!
//! This module defines the command-line interface for rhos using clap.
//! The CLI follows the pattern: `rhos <statistic> <input.csv> <C> [options] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Recursive mean with C = 0.1
//! rhos mean trace.csv 0.1
//!
//! # Recursive variance centred on the current mean, written to a file
//! rhos variance trace.csv 0.1 -d 1 -o var.csv
//!
//! # Recursive kurtosis (HOS of order 4) with a variance floor
//! rhos hos trace.csv 0.05 --order 4 --var-min 1e-6
//!
//! # Use the direct per-sample form and pick the signal column explicitly
//! rhos hos trace.csv 0.05 -c HHZ --naive
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand};
use rhos::Definition;

use crate::error::{CliError, Result};

/// rhos: recursive mean, variance and high-order statistics
#[derive(Parser, Debug)]
#[command(name = "rhos")]
#[command(author, version, about = "Recursive mean, variance and high-order statistics")]
#[command(long_about = "rhos computes running (recursive) statistics with an exponential \
    forgetting factor C over a signal read from a CSV file. The high-order statistic \
    of order 4 is a recursive kurtosis, useful for picking impulsive arrivals in \
    seismograms. Output is CSV, written to a file or stdout.")]
pub struct Args {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The statistic to compute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every statistic.
#[derive(ClapArgs, Debug, Clone)]
pub struct CommonArgs {
    /// Input CSV file
    pub input: String,

    /// Decay constant C in [0, 1]
    pub decay: f64,

    /// Output CSV file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Column holding the signal (auto-detected if not specified)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Use the direct per-sample form instead of the filter form
    #[arg(long)]
    pub naive: bool,
}

/// Available statistic commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recursive mean
    #[command(about = "Recursive mean")]
    Mean {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Recursive variance
    #[command(about = "Recursive variance")]
    Variance {
        #[command(flatten)]
        common: CommonArgs,

        /// Variance definition: 0 (prior mean) or 1 (current mean)
        #[arg(short, long, default_value = "0")]
        definition: String,
    },

    /// Recursive high-order statistics
    #[command(about = "Recursive high-order statistics (HOS)")]
    Hos {
        #[command(flatten)]
        common: CommonArgs,

        /// HOS order (4 gives a recursive kurtosis)
        #[arg(short = 'n', long, default_value = "4")]
        order: u32,

        /// Variance floor for the denominator (-1 disables it)
        #[arg(long, default_value = "-1", allow_negative_numbers = true)]
        var_min: f64,

        /// Variance definition: 0 (prior mean) or 1 (current mean)
        #[arg(short, long, default_value = "0")]
        definition: String,
    },
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Options shared by every command.
    #[must_use]
    pub const fn common(&self) -> &CommonArgs {
        self.command.common()
    }
}

impl Command {
    /// Options shared by every command.
    #[must_use]
    pub const fn common(&self) -> &CommonArgs {
        match self {
            Self::Mean { common } | Self::Variance { common, .. } | Self::Hos { common, .. } => {
                common
            }
        }
    }

    /// Short name of the statistic, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mean { .. } => "mean",
            Self::Variance { .. } => "variance",
            Self::Hos { .. } => "hos",
        }
    }
}

/// Parse a variance definition given as `0`/`1` or `prior`/`current`.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` for anything else.
pub fn parse_definition(value: &str) -> Result<Definition> {
    value
        .parse::<Definition>()
        .map_err(|_| CliError::InvalidArgument {
            argument: "definition".to_string(),
            reason: format!("unknown definition '{value}'"),
            suggestion: Some("Use 0 (prior mean) or 1 (current mean)".to_string()),
        })
}

/// Column header for a statistic's output, e.g. `hos4_0.05_d0`.
#[must_use]
pub fn output_header(
    statistic: &str,
    decay: f64,
    order: Option<u32>,
    definition: Option<Definition>,
) -> String {
    let mut header = String::from(statistic);
    if let Some(n) = order {
        header.push_str(&n.to_string());
    }
    header.push('_');
    header.push_str(&decay.to_string());
    if let Some(def) = definition {
        header.push_str("_d");
        header.push_str(&def.code().to_string());
    }
    header
}
