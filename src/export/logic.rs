// src/export/logic.rs

use crate::core::{ConfirmationGate, export_file_name};
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::LogEntry;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Where an export lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Exact output path.
    File(PathBuf),
    /// Directory; the name is derived from the export time.
    Dir(PathBuf),
}

impl ExportTarget {
    pub fn resolve(&self, format: ExportFormat, at: &DateTime<Utc>) -> PathBuf {
        match self {
            ExportTarget::File(p) => p.clone(),
            ExportTarget::Dir(d) => d.join(export_file_name(at, format.extension())),
        }
    }
}

/// Hands an already-built payload to the filesystem.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `payload` (chronological) and return the path written.
    pub fn deliver<G>(
        payload: &[LogEntry],
        format: ExportFormat,
        target: &ExportTarget,
        force: bool,
        gate: &mut G,
    ) -> AppResult<PathBuf>
    where
        G: ConfirmationGate + ?Sized,
    {
        let path = target.resolve(format, &Utc::now());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&path, force, gate)?;
        Self::write(payload, format, &path)?;

        notify_export_success(&format.as_str().to_uppercase(), &path, payload.len());
        Ok(path)
    }

    fn write(payload: &[LogEntry], format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Json => write_json(path, payload),
            ExportFormat::Csv => write_csv(path, payload),
        }
    }
}
