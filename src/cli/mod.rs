//! CLI argument parsing for pairgen.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `pipeline` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Pairgen: render a query+code template against parameter records into a CSV.
///
/// The template file holds two sections separated by a line containing
/// exactly `---`: a natural-language query template, then a code template.
/// Both may reference `{name}` placeholders.
#[derive(Parser, Debug)]
#[command(name = "pairgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the template file, split by a line `---`.
    pub template: PathBuf,

    /// Path to the output CSV file (created or overwritten).
    pub output: PathBuf,

    /// JSON or YAML file with the parameter records to render.
    ///
    /// A list of maps from placeholder name to scalar value. When omitted,
    /// the built-in model/temperature records are used.
    #[arg(short, long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
