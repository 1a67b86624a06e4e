//! CSV persistence for the study log.
//! The whole table is read or rewritten on every operation; appends are
//! semantic only, the file itself is always written in full.

use crate::errors::AppResult;
use crate::models::Entry;
use csv::{Reader, WriterBuilder};
use std::fs;
use std::path::Path;

/// Read the whole study log, or an empty table when the file does not exist.
pub fn load(path: &Path) -> AppResult<Vec<Entry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = Reader::from_path(path)?;
    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        entries.push(row?);
    }
    Ok(entries)
}

/// Rewrite the whole study log with header `Date,Minutes`.
pub fn save(path: &Path, entries: &[Entry]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(["Date", "Minutes"])?;
    for entry in entries {
        wtr.write_record(&[entry.date_str(), entry.minutes.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
