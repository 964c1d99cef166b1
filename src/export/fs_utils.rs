// src/export/fs_utils.rs

use crate::core::ConfirmationGate;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - exists and `force` → Ok
/// - exists otherwise → ask the gate.
pub(crate) fn ensure_writable<G>(path: &Path, force: bool, gate: &mut G) -> AppResult<()>
where
    G: ConfirmationGate + ?Sized,
{
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists. Overwrite?", path.display());
    if gate.confirm(&prompt) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
