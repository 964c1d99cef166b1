//! Event store: the ordered, append-only sequence of log entries mirrored
//! into a key-value backing.

use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{EntryType, LogEntry};
use tracing::{debug, warn};

/// Key under which the whole sequence is persisted.
pub const LOG_STORAGE_KEY: &str = "absenceLog";

/// In-memory copy of the log, persisted with a full rewrite on every change.
///
/// Single writer: nothing guards against two processes appending to the same
/// backing at once.
pub struct EventStore<K: KeyValueStore> {
    backend: K,
    entries: Vec<LogEntry>,
}

impl<K: KeyValueStore> EventStore<K> {
    /// Load the persisted sequence. Missing or unreadable content yields an
    /// empty store.
    pub fn load(backend: K) -> Self {
        let entries = read_entries(&backend);
        debug!(count = entries.len(), "event store loaded");
        Self { backend, entries }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Type of the most recent entry, `None` when nothing was recorded.
    pub fn current_status(&self) -> Option<EntryType> {
        self.last().map(|e| e.kind)
    }

    /// Persist the sequence with `entry` added. On a failed write the
    /// in-memory sequence is left as it was.
    pub fn append(&mut self, entry: LogEntry) -> AppResult<()> {
        self.entries.push(entry);
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Drop the persisted key, then empty the sequence.
    pub fn clear(&mut self) -> AppResult<()> {
        self.backend.remove(LOG_STORAGE_KEY)?;
        self.entries.clear();
        Ok(())
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }

    fn persist(&mut self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.entries)?;
        self.backend.set(LOG_STORAGE_KEY, &blob)
    }
}

fn read_entries<K: KeyValueStore>(backend: &K) -> Vec<LogEntry> {
    let raw = match backend.get(LOG_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read stored logs, starting empty");
            return Vec::new();
        }
    };

    // `null` is what an absent record looks like once serialized.
    match serde_json::from_str::<Option<Vec<LogEntry>>>(&raw) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "stored logs are malformed, treating as empty");
            Vec::new()
        }
    }
}
