//! Persistence of the run record.
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use crate::engine::RunResult;
use crate::error::AppResult;

/// Writes the result record as pretty-printed JSON. Unset options and
/// absent latency aggregates are omitted from the record.
///
/// # Errors
///
/// Returns an error when the file cannot be created or the record fails to
/// serialize.
pub fn write_json(path: &Path, result: &RunResult) -> AppResult<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, result)?;
    writeln!(file)?;
    Ok(())
}
