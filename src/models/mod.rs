pub mod entry_type;
pub mod filter;
pub mod log_entry;
pub mod page;
pub mod summary;

pub use entry_type::EntryType;
pub use filter::FilterSelector;
pub use log_entry::{Geolocation, LogEntry};
pub use page::PageState;
pub use summary::Summary;
