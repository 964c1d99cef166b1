use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::{AppError, AppResult};

/// Variable read for the diagnostic filter, e.g. `ABSENCELOG_LOG=debug`.
pub const LOG_ENV: &str = "ABSENCELOG_LOG";

/// Install the diagnostic subscriber. Output goes to stderr so it never
/// mixes with command output.
pub fn init_tracing(level: Option<&str>) -> AppResult<()> {
    let default_level = level.unwrap_or("warn");
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| AppError::Other(err.to_string()))?;

    Ok(())
}
