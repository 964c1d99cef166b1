use crate::errors::AppResult;
use crate::models::LogEntry;
use std::path::Path;

/// Pretty JSON array, same record layout as the stored blob.
pub(crate) fn write_json(path: &Path, entries: &[LogEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
