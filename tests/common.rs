#![allow(dead_code)]
use absencelog::core::EventStore;
use absencelog::db::{KeyValueStore, MemoryKv};
use absencelog::errors::{AppError, AppResult};
use absencelog::location::{LocationError, LocationOptions, LocationProvider};
use absencelog::models::{EntryType, Geolocation, LogEntry};
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub fn rti() -> Command {
    cargo_bin_cmd!("absencelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_absencelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Entry at noon UTC on the given day: far enough from midnight that the
/// local calendar date is the same in every time zone.
pub fn entry(kind: EntryType, y: i32, m: u32, d: u32) -> LogEntry {
    entry_at(kind, y, m, d, 12, 0)
}

pub fn entry_at(kind: EntryType, y: i32, m: u32, d: u32, h: u32, min: u32) -> LogEntry {
    let ts = Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap();
    LogEntry::new(kind, ts, format!("{kind} on {y}-{m:02}-{d:02}"), None)
}

pub fn store_with(entries: &[LogEntry]) -> EventStore<MemoryKv> {
    let mut store = EventStore::load(MemoryKv::new());
    for e in entries {
        store.append(e.clone()).unwrap();
    }
    store
}

/// 2023: 4 entries (2 in, 2 out), 2024: 3 entries (2 in, 1 out).
pub fn two_year_dataset() -> Vec<LogEntry> {
    use EntryType::*;
    vec![
        entry(ClockIn, 2023, 3, 1),
        entry(ClockOut, 2023, 3, 2),
        entry(ClockIn, 2023, 7, 10),
        entry(ClockOut, 2023, 7, 11),
        entry(ClockIn, 2024, 1, 15),
        entry(ClockOut, 2024, 1, 16),
        entry(ClockIn, 2024, 2, 20),
    ]
}

/// Provider answering immediately with a fixed reading.
pub struct FakeOk(pub Geolocation);

#[async_trait]
impl LocationProvider for FakeOk {
    fn is_supported(&self) -> bool {
        true
    }

    async fn locate(&self, _options: &LocationOptions) -> Result<Geolocation, LocationError> {
        Ok(self.0)
    }
}

/// Provider failing with the given error.
pub struct FakeErr(pub LocationError);

#[async_trait]
impl LocationProvider for FakeErr {
    fn is_supported(&self) -> bool {
        true
    }

    async fn locate(&self, _options: &LocationOptions) -> Result<Geolocation, LocationError> {
        Err(self.0.clone())
    }
}

/// Provider that answers only after `delay`.
pub struct Slow(pub Duration);

#[async_trait]
impl LocationProvider for Slow {
    fn is_supported(&self) -> bool {
        true
    }

    async fn locate(&self, _options: &LocationOptions) -> Result<Geolocation, LocationError> {
        tokio::time::sleep(self.0).await;
        Ok(Geolocation::new(1.0, 2.0, 3.0))
    }
}

/// In-memory backing whose writes can be made to fail.
#[derive(Default)]
pub struct BrokenKv {
    pub inner: MemoryKv,
    pub fail_set: bool,
    pub fail_remove: bool,
}

impl KeyValueStore for BrokenKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_set {
            return Err(AppError::Other("disk full".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.fail_remove {
            return Err(AppError::Other("read-only medium".into()));
        }
        self.inner.remove(key)
    }
}
