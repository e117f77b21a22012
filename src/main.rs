//! Pairgen: render a query+code template against parameter records into a CSV.
//!
//! This is the main entry point for the `pairgen` CLI. It parses arguments,
//! runs the load → render → write pipeline, and maps errors to exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod params;
mod pipeline;
pub mod template;
pub mod writer;

use cli::Cli;
use pipeline::RunOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    let options = RunOptions::from(&cli);
    match pipeline::run(&options) {
        Ok(rows) => {
            println!("Wrote {} rows to {}", rows, options.output.display());
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
