use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a recorded action.
///
/// Serialized with the human labels (`"Clock In"` / `"Clock Out"`) so the
/// stored blob and exported files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "Clock In")]
    ClockIn,
    #[serde(rename = "Clock Out")]
    ClockOut,
}

impl EntryType {
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::ClockIn => "Clock In",
            EntryType::ClockOut => "Clock Out",
        }
    }

    /// Short operation name used in the internal audit log.
    pub fn operation(&self) -> &'static str {
        match self {
            EntryType::ClockIn => "clock_in",
            EntryType::ClockOut => "clock_out",
        }
    }

    /// "clocked in" / "clocked out", for status messages.
    pub fn past_tense(&self) -> &'static str {
        match self {
            EntryType::ClockIn => "clocked in",
            EntryType::ClockOut => "clocked out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EntryType::ClockIn)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
