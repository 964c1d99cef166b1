use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::FilterSelector;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for absencelog
#[derive(Parser)]
#[command(
    name = "absencelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal attendance ledger: clock in/out with notes and location, list, summarize and export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Month/year selection shared by list, summary and export.
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Period as YYYY or YYYY-MM
    #[arg(long, short, conflicts_with_all = ["month", "year"])]
    pub period: Option<String>,

    /// Month (1-12)
    #[arg(long)]
    pub month: Option<u32>,

    /// Year (e.g. 2024)
    #[arg(long)]
    pub year: Option<i32>,
}

impl PeriodArgs {
    pub fn selector(&self) -> AppResult<FilterSelector> {
        match &self.period {
            Some(p) => FilterSelector::from_period(p),
            None => FilterSelector::new(self.month, self.year),
        }
    }
}

/// Options of a clock-in / clock-out action.
#[derive(Args, Debug, Clone, Default)]
pub struct ClockArgs {
    /// Free-text notes (quote multi-word notes)
    pub notes: Option<String>,

    /// Latitude of a known position (skips the location command)
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude of a known position
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Accuracy of --lat/--lon in meters
    #[arg(long, requires = "lat")]
    pub accuracy: Option<f64>,

    /// Do not try to acquire a location
    #[arg(long = "no-location", conflicts_with_all = ["lat", "lon"])]
    pub no_location: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a clock-in
    In(ClockArgs),

    /// Record a clock-out
    Out(ClockArgs),

    /// List logs, most recent first, one page at a time
    List {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// Show per-type counts for a period
    Summary {
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Show the current clock status
    Status,

    /// Export logs (oldest first)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Exact output file
        #[arg(long, value_name = "FILE", conflicts_with = "dir")]
        file: Option<String>,

        /// Output directory; the file name is generated
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        #[command(flatten)]
        period: PeriodArgs,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete all logs
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
