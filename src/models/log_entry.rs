use super::entry_type::EntryType;
use crate::utils::time::iso_millis;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A location reading attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters.
    #[serde(rename = "accuracy", alias = "accuracyMeters")]
    pub accuracy_meters: f64,
}

impl Geolocation {
    pub fn new(latitude: f64, longitude: f64, accuracy_meters: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters,
        }
    }

    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={:.5},{:.5}",
            self.latitude, self.longitude
        )
    }
}

/// One recorded clock-in / clock-out action. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub geolocation: Option<Geolocation>,
}

impl LogEntry {
    pub fn new(
        kind: EntryType,
        timestamp: DateTime<Utc>,
        notes: impl Into<String>,
        geolocation: Option<Geolocation>,
    ) -> Self {
        Self {
            kind,
            timestamp,
            notes: notes.into(),
            geolocation,
        }
    }

    /// Timestamp in the host time zone, which is what period filters and
    /// the list view use.
    pub fn local_time(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}
