pub mod clear;
pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod summary;

use crate::config::Config;
use crate::core::{EventStore, Session};
use crate::db::SqliteKv;
use crate::errors::AppResult;
use crate::models::PageState;

/// Open the configured database and load the log.
pub(crate) fn open_store(cfg: &Config) -> AppResult<EventStore<SqliteKv>> {
    let kv = SqliteKv::open(&cfg.database)?;
    Ok(EventStore::load(kv))
}

pub(crate) fn new_session(cfg: &Config) -> Session {
    Session::new(Default::default(), PageState::new(cfg.page_size))
}
