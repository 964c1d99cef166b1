use crate::errors::AppResult;
use crate::export::model::EntryExport;
use crate::models::LogEntry;
use std::path::Path;

pub(crate) fn write_csv(path: &Path, entries: &[LogEntry]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;
    for e in entries {
        wtr.serialize(EntryExport::from(e))?;
    }
    wtr.flush()?;
    Ok(())
}
