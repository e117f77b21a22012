//! ParameterSet definition and the built-in default records.

use super::types::ParamValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One rendering instance: placeholder name to value.
pub type ParameterRecord = BTreeMap<String, ParamValue>;

/// Ordered list of parameter records.
///
/// Rendering produces one pair per record, in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub records: Vec<ParameterRecord>,
}

impl ParameterSet {
    pub fn new(records: Vec<ParameterRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterRecord> {
        self.records.iter()
    }
}

/// Build a record from key/value pairs.
pub fn record<I, K, V>(pairs: I) -> ParameterRecord
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ParamValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl Default for ParameterSet {
    /// Model/temperature combinations used when no record file is given.
    fn default() -> Self {
        Self::new(vec![
            record([
                ("model", ParamValue::from("gpt-3.5")),
                ("temperature", ParamValue::from(0.7)),
            ]),
            record([
                ("model", ParamValue::from("gpt-4")),
                ("temperature", ParamValue::from(0.1)),
            ]),
            record([
                ("model", ParamValue::from("gpt-4-turbo")),
                ("temperature", ParamValue::from(0.5)),
            ]),
        ])
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a ParameterRecord;
    type IntoIter = std::slice::Iter<'a, ParameterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
