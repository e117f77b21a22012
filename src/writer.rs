//! CSV output for rendered pairs.
//!
//! The document is built in memory with the `csv` crate (standard RFC 4180
//! quoting) and then written atomically.

use crate::error::{PairgenError, Result};
use crate::fs::atomic_write;
use crate::template::RenderedPair;
use std::io;
use std::path::Path;

/// Header row of every output file.
pub const HEADER: [&str; 2] = ["user_query", "code"];

/// Serialize pairs as CSV: the header row, then one row per pair.
pub fn to_csv_bytes(pairs: &[RenderedPair]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for pair in pairs {
        writer.write_record([pair.query.as_str(), pair.code.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(io::Error::other(e.to_string())))
}

/// Create or overwrite `path` with the CSV rendering of `pairs`.
pub fn write_pairs<P: AsRef<Path>>(pairs: &[RenderedPair], path: P) -> Result<()> {
    let path = path.as_ref();

    let bytes = to_csv_bytes(pairs).map_err(|e| PairgenError::io(path, io::Error::other(e)))?;
    atomic_write(path, &bytes)?;

    tracing::debug!(rows = pairs.len(), bytes = bytes.len(), path = %path.display(), "wrote csv");
    Ok(())
}
