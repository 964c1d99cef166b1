pub mod clear;
pub mod clock;
pub mod config;
pub mod export;
pub mod filter;
pub mod log;
pub mod pager;
pub mod session;
pub mod store;
pub mod summary;

pub use clear::{ClearOutcome, ConfirmationGate, clear_all};
pub use clock::{ClockController, ClockOutcome, ClockState};
pub use export::{export_file_name, export_view};
pub use filter::filter_view;
pub use pager::{PageInfo, page_info, page_slice};
pub use session::{Session, ViewState};
pub use store::{EventStore, LOG_STORAGE_KEY};
pub use summary::summarize;
