//! Parameter records for template rendering.
//!
//! Records are loaded from a JSON or YAML data file, or taken from the
//! built-in default set when no file is given. Each record maps placeholder
//! names to scalar values.

mod model;
mod operations;
pub mod types;


pub use model::{ParameterRecord, ParameterSet, record};
pub use types::ParamValue;
