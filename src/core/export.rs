//! Export snapshot of a view.

use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::utils::time::filename_stamp;
use chrono::{DateTime, Utc};

pub const EXPORT_FILE_PREFIX: &str = "absence_log_";

/// Copy of `view` in store order (oldest first), i.e. the view reversed.
/// An empty view is rejected.
pub fn export_view(view: &[&LogEntry]) -> AppResult<Vec<LogEntry>> {
    if view.is_empty() {
        return Err(AppError::EmptyView);
    }

    Ok(view.iter().rev().map(|e| (*e).clone()).collect())
}

/// `absence_log_2024-03-15T12-00-00.json`
pub fn export_file_name(at: &DateTime<Utc>, ext: &str) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.{ext}", filename_stamp(at))
}
