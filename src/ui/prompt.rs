//! Terminal confirmation gates.

use crate::core::ConfirmationGate;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Reads `y`/`yes` from stdin. Anything else, or a read error, is a no.
pub struct StdinPrompt;

impl ConfirmationGate for StdinPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        warning(prompt);
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        match io::stdin().lock().read_line(&mut s) {
            Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

/// `--yes`: accept without asking.
pub struct AssumeYes;

impl ConfirmationGate for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
