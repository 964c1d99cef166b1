//! Time utilities: ISO-8601 timestamps as stored on disk and used in
//! export filenames.

use chrono::{DateTime, SecondsFormat, Utc};

/// `2024-03-15T12:00:00.000Z`
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// ISO timestamp at seconds precision with `:` replaced, safe for filenames:
/// `2024-03-15T12-00-00`
pub fn filename_stamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
        .trim_end_matches('Z')
        .replace(':', "-")
}

/// Serde adapter for `DateTime<Utc>` with millisecond precision and a `Z`
/// suffix. Any RFC 3339 offset is accepted on read.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&super::to_iso(ts))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
