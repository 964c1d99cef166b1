//! Irreversible truncation of the log.

use crate::core::session::Session;
use crate::core::store::EventStore;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};

pub const CLEAR_PROMPT: &str =
    "Are you sure you want to delete all log entries? This cannot be undone.";

/// Yes/no gate in front of destructive actions.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Number of entries removed.
    Cleared(usize),
    Cancelled,
}

/// Empty the store after confirmation and reset filter and page.
pub fn clear_all<K, G>(
    store: &mut EventStore<K>,
    session: &mut Session,
    gate: &mut G,
) -> AppResult<ClearOutcome>
where
    K: KeyValueStore,
    G: ConfirmationGate + ?Sized,
{
    if store.is_empty() {
        return Err(AppError::EmptyStore);
    }

    if !gate.confirm(CLEAR_PROMPT) {
        return Ok(ClearOutcome::Cancelled);
    }

    let removed = store.len();
    store.clear()?;
    session.reset();
    Ok(ClearOutcome::Cleared(removed))
}
