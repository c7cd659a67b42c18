//! Command execution: read the signal, compute the statistic, write the result.

use rhos::statistics::{
    recursive_hos, recursive_hos_naive, recursive_mean, recursive_mean_naive, recursive_variance,
    recursive_variance_naive,
};
use tracing::{debug, info};

use crate::args::{output_header, parse_definition, Args, Command};
use crate::csv_parser::read_signal;
use crate::csv_writer::{write_statistic, OutputDest};
use crate::error::Result;

/// A computed statistic and the header it is written under.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticOutput {
    /// Output column header.
    pub header: String,
    /// One value per input sample.
    pub values: Vec<f64>,
}

/// Compute the statistic a command asks for over `signal`.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` for an unknown definition and
/// `CliError::StatisticError` if the statistic rejects its arguments.
pub fn compute(command: &Command, signal: &[f64]) -> Result<StatisticOutput> {
    let common = command.common();
    let c = common.decay;

    let (header, values) = match command {
        Command::Mean { .. } => {
            let values = if common.naive {
                recursive_mean_naive(signal, c)?
            } else {
                recursive_mean(signal, c)?
            };
            (output_header("mean", c, None, None), values)
        }
        Command::Variance { definition, .. } => {
            let definition = parse_definition(definition)?;
            let values = if common.naive {
                recursive_variance_naive(signal, c, definition)?
            } else {
                recursive_variance(signal, c, definition)?
            };
            (output_header("var", c, None, Some(definition)), values)
        }
        Command::Hos {
            order,
            var_min,
            definition,
            ..
        } => {
            let definition = parse_definition(definition)?;
            let values = if common.naive {
                recursive_hos_naive(signal, c, *order, *var_min, definition)?
            } else {
                recursive_hos(signal, c, *order, *var_min, definition)?
            };
            (output_header("hos", c, Some(*order), Some(definition)), values)
        }
    };

    debug!(statistic = command.name(), naive = common.naive, %header, "computed statistic");
    Ok(StatisticOutput { header, values })
}

/// Run a parsed command line end to end.
///
/// # Errors
///
/// Returns any error from reading the input, computing the statistic or
/// writing the output.
pub fn run(args: &Args) -> Result<()> {
    let common = args.common();
    let signal = read_signal(&common.input, common.column.as_deref())?;
    info!(
        input = %common.input,
        column = %signal.name,
        samples = signal.samples.len(),
        "read signal"
    );

    let output = compute(&args.command, &signal.samples)?;

    let dest = OutputDest::from_arg(common.output.as_deref());
    write_statistic(&output.values, &output.header, signal.time.as_ref(), &dest)?;
    info!(destination = ?dest, rows = output.values.len(), "wrote output");
    Ok(())
}
