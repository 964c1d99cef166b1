//! Clock event controller: one clock-in / clock-out action, with a
//! best-effort location reading attached.

use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::location::{LocationError, LocationOptions, LocationProvider};
use crate::models::{EntryType, Geolocation, LogEntry};
use chrono::{DateTime, Local, Utc};
use tokio::time::timeout;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    AwaitingLocation,
    Completed,
    CompletedWithoutLocation,
}

/// How a submission went. The data effect is the same in every branch: one
/// entry appended.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockOutcome {
    RecordedWithLocation(LogEntry),
    LocationFailed { entry: LogEntry, reason: String },
    LocationUnsupported(LogEntry),
}

impl ClockOutcome {
    pub fn entry(&self) -> &LogEntry {
        match self {
            ClockOutcome::RecordedWithLocation(e) => e,
            ClockOutcome::LocationFailed { entry, .. } => entry,
            ClockOutcome::LocationUnsupported(e) => e,
        }
    }

    pub fn has_location(&self) -> bool {
        matches!(self, ClockOutcome::RecordedWithLocation(_))
    }

    pub fn location_status(&self) -> String {
        match self {
            ClockOutcome::RecordedWithLocation(_) => "Location captured successfully.".to_string(),
            ClockOutcome::LocationFailed { reason, .. } => {
                format!("Could not get location: {reason}")
            }
            ClockOutcome::LocationUnsupported(_) => {
                "Geolocation is not supported on this host.".to_string()
            }
        }
    }

    pub fn status_message(&self) -> String {
        let entry = self.entry();
        let at = entry.local_time().format("%H:%M:%S");
        let base = format!("Successfully {} at {at}", entry.kind.past_tense());
        match self {
            ClockOutcome::RecordedWithLocation(_) => base,
            ClockOutcome::LocationFailed { .. } => format!("{base} (location failed)."),
            ClockOutcome::LocationUnsupported(_) => format!("{base} (geolocation not supported)."),
        }
    }
}

/// Drives `Idle -> AwaitingLocation -> Completed | CompletedWithoutLocation`.
///
/// `submit` borrows the controller mutably, so a second submission cannot
/// start while one is awaiting its location.
pub struct ClockController<'p, P: LocationProvider + ?Sized> {
    provider: &'p P,
    options: LocationOptions,
    state: ClockState,
    now: fn() -> DateTime<Utc>,
}

impl<'p, P: LocationProvider + ?Sized> ClockController<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            options: LocationOptions::default(),
            state: ClockState::Idle,
            now: Utc::now,
        }
    }

    pub fn with_options(mut self, options: LocationOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the timestamp source.
    pub fn with_clock(mut self, now: fn() -> DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn options(&self) -> &LocationOptions {
        &self.options
    }

    /// Record one entry. Only a failure to persist is an error; location
    /// problems are reported through the outcome.
    pub async fn submit<K: KeyValueStore>(
        &mut self,
        store: &mut EventStore<K>,
        session: &mut Session,
        kind: EntryType,
        notes: &str,
    ) -> AppResult<ClockOutcome> {
        self.state = ClockState::AwaitingLocation;

        let reading = self.acquire().await;
        let geolocation = reading.as_ref().ok().copied();
        let entry = LogEntry::new(kind, (self.now)(), notes, geolocation);

        if let Err(e) = store.append(entry.clone()) {
            self.state = ClockState::Idle;
            return Err(e);
        }

        if session.selector.matches(&entry) {
            session.page.reset();
        }

        let outcome = match reading {
            Ok(_) => {
                self.state = ClockState::Completed;
                ClockOutcome::RecordedWithLocation(entry)
            }
            Err(LocationError::Unsupported) => {
                self.state = ClockState::CompletedWithoutLocation;
                ClockOutcome::LocationUnsupported(entry)
            }
            Err(e) => {
                self.state = ClockState::CompletedWithoutLocation;
                ClockOutcome::LocationFailed {
                    entry,
                    reason: e.to_string(),
                }
            }
        };

        info!(
            kind = %kind,
            at = %outcome.entry().timestamp.with_timezone(&Local),
            with_location = outcome.has_location(),
            "entry recorded"
        );
        Ok(outcome)
    }

    /// A result arriving after the deadline is dropped along with its future.
    async fn acquire(&self) -> Result<Geolocation, LocationError> {
        if !self.provider.is_supported() {
            info!("geolocation is not supported");
            return Err(LocationError::Unsupported);
        }

        let result = match timeout(self.options.timeout, self.provider.locate(&self.options)).await
        {
            Ok(r) => r,
            Err(_) => Err(LocationError::Timeout(self.options.timeout.as_millis() as u64)),
        };

        if let Err(e) = &result {
            warn!(error = %e, "geolocation error");
        }
        result
    }
}
