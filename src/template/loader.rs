//! Template file loading and section splitting.

use super::render::placeholders;
use crate::error::{PairgenError, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Line that separates the query section from the code section.
pub const SEPARATOR: &str = "---";

/// A query template and a code template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub query: String,
    pub code: String,
}

impl Template {
    /// Read and parse a template file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PairgenError::io(path, e))?;
        Self::parse(&content)
    }

    /// Split template text at the first line equal to `---`.
    ///
    /// Both sections are trimmed of surrounding whitespace. Later separator
    /// lines are kept verbatim in the code section.
    pub fn parse(content: &str) -> Result<Self> {
        let lines = split_lines(content);

        let sep_idx = lines
            .iter()
            .position(|line| *line == SEPARATOR)
            .ok_or_else(|| {
                PairgenError::MalformedTemplate(format!(
                    "template must contain a line with exactly '{}' separating the query and code sections",
                    SEPARATOR
                ))
            })?;

        let query = lines[..sep_idx].join("\n").trim().to_string();
        let code = lines[sep_idx + 1..].join("\n").trim().to_string();

        Ok(Self { query, code })
    }

    /// Distinct placeholder names referenced by either section.
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut names = placeholders(&self.query);
        names.extend(placeholders(&self.code));
        names
    }
}

/// Split on `\n`, `\r\n`, or a bare `\r`, without a trailing empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(idx) = rest.find(['\r', '\n']) {
        lines.push(&rest[..idx]);
        let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }

    lines
}
