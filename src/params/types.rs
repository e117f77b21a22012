//! Scalar value type carried by parameter records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar parameter value.
///
/// Variant order matters for untagged deserialization: booleans and integers
/// must be tried before floats, and strings last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Float(x) => f.write_str(&format_float(*x)),
            ParamValue::String(s) => f.write_str(s),
        }
    }
}

/// Shortest round-trip form of a float.
///
/// Magnitudes in `[1e-4, 1e16)` are positional and integral values keep a
/// trailing `.0`. Others use an exponent with an explicit sign and at least
/// two digits (`1e+20`, `2.5e-07`).
fn format_float(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let exp_form = format!("{:e}", x);
        if let Some((mantissa, exponent)) = exp_form.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{}e{}{:0>2}", mantissa, sign, digits);
        }
        return exp_form;
    }

    let s = x.to_string();
    if s.contains('.') { s } else { format!("{}.0", s) }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Integer(i)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}
