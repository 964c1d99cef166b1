use crate::errors::{AppError, AppResult};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Open `path` in the requested editor, then `$EDITOR` / `$VISUAL`, then
    /// the platform default.
    pub fn edit(path: &str, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let candidates = match editor {
            Some(e) if *e != default_editor => vec![e.clone(), default_editor],
            _ => vec![default_editor],
        };

        for ed in candidates {
            match Command::new(&ed).arg(path).status() {
                Ok(s) if s.success() => return Ok(ed),
                _ => tracing::warn!(editor = %ed, "editor not available"),
            }
        }

        Err(AppError::Config(format!("no usable editor for {path}")))
    }
}
