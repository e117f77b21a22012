//! Exit code constants for the pairgen CLI.
//!
//! - 0: Success
//! - 1: Invalid parameter records
//! - 2: Command-line usage error (reported by clap)
//! - 3: Malformed template (missing separator)
//! - 4: Missing placeholder value
//! - 5: Filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Parameter record file could not be parsed or has the wrong shape.
pub const INVALID_PARAMS: i32 = 1;

/// Bad arguments. clap exits with this code itself; no pairgen error uses it.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Template file has no `---` separator line.
pub const MALFORMED_TEMPLATE: i32 = 3;

/// A record lacks a key that the template references.
pub const MISSING_PLACEHOLDER: i32 = 4;

/// Reading the template/records or writing the CSV failed.
pub const IO_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            INVALID_PARAMS,
            USAGE_ERROR,
            MALFORMED_TEMPLATE,
            MISSING_PLACEHOLDER,
            IO_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_table() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(INVALID_PARAMS, 1);
        assert_eq!(USAGE_ERROR, 2);
        assert_eq!(MALFORMED_TEMPLATE, 3);
        assert_eq!(MISSING_PLACEHOLDER, 4);
        assert_eq!(IO_FAILURE, 5);
    }

    #[test]
    fn usage_error_matches_clap() {
        let err = Cli::try_parse_from(["pairgen", "template.txt"]).unwrap_err();
        assert_eq!(err.exit_code(), USAGE_ERROR);
    }
}
