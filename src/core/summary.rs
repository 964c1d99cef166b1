use crate::models::{LogEntry, Summary};

pub fn summarize<'a, I>(view: I) -> Summary
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut summary = Summary::default();
    for entry in view {
        summary.tally(entry.kind);
    }
    summary
}
