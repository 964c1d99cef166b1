use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use chrono::Datelike;
use regex::Regex;

/// Optional month/year selectors. Both set ⇒ conjunctive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelector {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl FilterSelector {
    pub fn new(month: Option<u32>, year: Option<i32>) -> AppResult<Self> {
        if let Some(m) = month
            && !(1..=12).contains(&m)
        {
            return Err(AppError::InvalidMonth(m));
        }
        Ok(Self { month, year })
    }

    /// Parse `YYYY` or `YYYY-MM`.
    pub fn from_period(period: &str) -> AppResult<Self> {
        let re = Regex::new(r"^(\d{4})(?:-(\d{1,2}))?$")
            .map_err(|e| AppError::Other(e.to_string()))?;
        let caps = re
            .captures(period.trim())
            .ok_or_else(|| AppError::InvalidPeriod(period.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidPeriod(period.to_string()))?;
        let month = match caps.get(2) {
            Some(m) => Some(
                m.as_str()
                    .parse::<u32>()
                    .map_err(|_| AppError::InvalidPeriod(period.to_string()))?,
            ),
            None => None,
        };

        Self::new(month, Some(year))
    }

    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }

    /// Month and year are read from the entry's local calendar date.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        let local = entry.local_time();

        if let Some(y) = self.year
            && local.year() != y
        {
            return false;
        }
        if let Some(m) = self.month
            && local.month() != m
        {
            return false;
        }
        true
    }

    pub fn describe(&self) -> String {
        match (self.month, self.year) {
            (None, None) => "all logs".to_string(),
            (Some(m), None) => format!("{} (any year)", month_name(m)),
            (None, Some(y)) => format!("year {y}"),
            (Some(m), Some(y)) => format!("{} {y}", month_name(m)),
        }
    }
}

pub fn month_name(m: u32) -> &'static str {
    match m {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
