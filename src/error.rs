//! Error types for the pairgen CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the run aborts
//! with the message and the variant's exit code.

use crate::exit_codes;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of a template a placeholder was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Query,
    Code,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Query => f.write_str("query"),
            Section::Code => f.write_str("code"),
        }
    }
}

/// Main error type for pairgen operations.
#[derive(Error, Debug)]
pub enum PairgenError {
    /// The template file lacks the `---` separator line.
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// A parameter record lacks a key referenced by the template.
    #[error("missing placeholder '{key}' in record {record} ({section} template)")]
    MissingPlaceholder {
        key: String,
        /// Zero-based index of the offending record.
        record: usize,
        section: Section,
    },

    /// The parameter record file is unreadable as a list of scalar maps.
    #[error("invalid parameter records: {0}")]
    InvalidParams(String),

    /// Filesystem failure reading input or writing output.
    #[error("I/O failure on '{}': {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PairgenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PairgenError::IoFailure {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PairgenError::MalformedTemplate(_) => exit_codes::MALFORMED_TEMPLATE,
            PairgenError::MissingPlaceholder { .. } => exit_codes::MISSING_PLACEHOLDER,
            PairgenError::InvalidParams(_) => exit_codes::INVALID_PARAMS,
            PairgenError::IoFailure { .. } => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for pairgen operations.
pub type Result<T> = std::result::Result<T, PairgenError>;
