//! Period filter: month/year selection over the store.

use crate::models::{FilterSelector, LogEntry};

/// Entries matching `selector`, most recent first.
pub fn filter_view<'a>(entries: &'a [LogEntry], selector: &FilterSelector) -> Vec<&'a LogEntry> {
    entries
        .iter()
        .rev()
        .filter(|e| selector.matches(e))
        .collect()
}
