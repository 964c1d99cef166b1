// src/export/model.rs

use crate::models::LogEntry;
use crate::utils::time::to_iso;
use serde::Serialize;

/// Flat row for tabular formats. Geolocation fields are empty when absent.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
    pub notes: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy: Option<f64>,
}

impl From<&LogEntry> for EntryExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            kind: e.kind.label().to_string(),
            timestamp: to_iso(&e.timestamp),
            notes: e.notes.clone(),
            latitude: e.geolocation.map(|g| g.latitude),
            longitude: e.geolocation.map(|g| g.longitude),
            accuracy: e.geolocation.map(|g| g.accuracy_meters),
        }
    }
}
