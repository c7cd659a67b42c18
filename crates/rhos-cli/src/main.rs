//! rhos command-line interface
//!
//! This binary computes recursive mean, variance and high-order statistics
//! over a signal read from a CSV file.

use std::process::ExitCode;

use rhos_cli::args::Args;
use rhos_cli::logging::init_logging;

fn main() -> ExitCode {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match rhos_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
