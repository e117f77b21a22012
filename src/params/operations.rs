//! Record loading, parsing, and validation.

use super::model::{ParameterRecord, ParameterSet};
use crate::error::{PairgenError, Result};
use serde::Deserialize;
use std::path::Path;

/// Accepted top-level shapes of a record file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordDocument {
    List(Vec<ParameterRecord>),
    Wrapped { records: Vec<ParameterRecord> },
}

impl From<RecordDocument> for ParameterSet {
    fn from(doc: RecordDocument) -> Self {
        match doc {
            RecordDocument::List(records) | RecordDocument::Wrapped { records } => {
                ParameterSet::new(records)
            }
        }
    }
}

const SHAPE_HINT: &str =
    "expected a list of maps from names to scalar values (optionally under a `records` key)";

impl ParameterSet {
    /// Load records from a `.json`, `.yaml`, or `.yml` file.
    ///
    /// # Returns
    ///
    /// * `Ok(ParameterSet)` - Successfully loaded and validated records
    /// * `Err(PairgenError::IoFailure)` - The file could not be read
    /// * `Err(PairgenError::InvalidParams)` - Unknown extension, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => {
                return Err(PairgenError::InvalidParams(format!(
                    "'{}' must have a .json, .yaml, or .yml extension",
                    path.display()
                )));
            }
        };

        let content =
            std::fs::read_to_string(path).map_err(|e| PairgenError::io(path, e))?;

        parse(&content).map_err(|e| match e {
            PairgenError::InvalidParams(msg) => {
                PairgenError::InvalidParams(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse records from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: RecordDocument = serde_json::from_str(json)
            .map_err(|e| PairgenError::InvalidParams(format!("{} ({})", SHAPE_HINT, e)))?;

        let set = Self::from(doc);
        set.validate()?;
        Ok(set)
    }

    /// Parse records from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: RecordDocument = serde_yaml::from_str(yaml)
            .map_err(|e| PairgenError::InvalidParams(format!("{} ({})", SHAPE_HINT, e)))?;

        let set = Self::from(doc);
        set.validate()?;
        Ok(set)
    }

    /// Validate record keys.
    ///
    /// Keys must be non-empty. Keys that can never be referenced as a
    /// placeholder are allowed but reported at debug level.
    pub fn validate(&self) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            for key in record.keys() {
                if key.is_empty() {
                    return Err(PairgenError::InvalidParams(format!(
                        "record {} has an empty key",
                        index
                    )));
                }
                if !crate::template::is_placeholder_name(key) {
                    tracing::debug!(record = index, key = %key, "key is not a valid placeholder name");
                }
            }
        }
        Ok(())
    }
}
