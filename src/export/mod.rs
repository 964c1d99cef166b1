// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;

pub use logic::{ExportLogic, ExportTarget};
pub use model::EntryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion message shared by all formats.
pub(crate) fn notify_export_success(label: &str, path: &Path, count: usize) {
    success(format!(
        "{label} export completed: {} ({count} entries)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}
