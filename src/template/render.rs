//! Placeholder substitution for templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of `name`, where `name` is an identifier
//!   (`[A-Za-z_][A-Za-z0-9_]*`)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Any other brace text is copied through unchanged, so code such as
//! `{"role": "user"}` or `fn main() {}` needs no escaping. Nothing inside
//! braces is ever evaluated.
//!
//! Undefined placeholders are an error rather than an empty substitution.

use super::loader::Template;
use crate::error::{PairgenError, Result, Section};
use crate::params::{ParameterRecord, ParameterSet};
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::fmt::{self, Write};
use std::sync::LazyLock;

/// Escapes first, so `{{name}}` renders as a literal `{name}`.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid placeholder regex")
});

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid placeholder name regex")
});

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was referenced but the record has no such key.
    UndefinedPlaceholder {
        name: String,
        /// Byte offset of the opening `{` in the template.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedPlaceholder { name, position } => {
                write!(
                    f,
                    "undefined placeholder '{}' at position {} in template",
                    name, position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// One rendered (query, code) row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPair {
    pub query: String,
    pub code: String,
}

/// Whether `name` can be referenced as `{name}`.
pub fn is_placeholder_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Distinct placeholder names referenced by `template`, escapes excluded.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    TOKEN_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Render a template string against one parameter record.
///
/// Values are substituted using their natural string form (see
/// [`ParamValue`](crate::params::ParamValue)).
pub fn render_template(
    template: &str,
    record: &ParameterRecord,
) -> std::result::Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for caps in TOKEN_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        result.push_str(&template[last..whole.start()]);
        last = whole.end();

        push_token(&mut result, &caps, record)?;
    }

    result.push_str(&template[last..]);
    Ok(result)
}

fn push_token(
    out: &mut String,
    caps: &Captures<'_>,
    record: &ParameterRecord,
) -> std::result::Result<(), TemplateError> {
    let Some(name) = caps.get(1) else {
        // `{{` or `}}`
        out.push_str(&caps[0][..1]);
        return Ok(());
    };

    match record.get(name.as_str()) {
        Some(value) => {
            // Writing to a String cannot fail.
            let _ = write!(out, "{}", value);
            Ok(())
        }
        None => Err(TemplateError::UndefinedPlaceholder {
            name: name.as_str().to_string(),
            position: name.start() - 1,
        }),
    }
}

impl Template {
    /// Render both sections against one record.
    ///
    /// The error names the section holding the undefined placeholder.
    pub fn render(
        &self,
        record: &ParameterRecord,
    ) -> std::result::Result<RenderedPair, (Section, TemplateError)> {
        let query = render_template(&self.query, record).map_err(|e| (Section::Query, e))?;
        let code = render_template(&self.code, record).map_err(|e| (Section::Code, e))?;

        Ok(RenderedPair { query, code })
    }
}

/// Render both template sections for every record, preserving record order.
///
/// The first record missing a referenced key aborts the whole render.
pub fn render_pairs(template: &Template, records: &ParameterSet) -> Result<Vec<RenderedPair>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            template.render(record).map_err(|(section, err)| match err {
                TemplateError::UndefinedPlaceholder { name, .. } => {
                    PairgenError::MissingPlaceholder {
                        key: name,
                        record: index,
                        section,
                    }
                }
            })
        })
        .collect()
}
