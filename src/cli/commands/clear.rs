use crate::cli::commands::{new_session, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ClearOutcome, ConfirmationGate, clear_all};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::{AssumeYes, StdinPrompt};
use crate::ui::render::render_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(cfg)?;
        let mut session = new_session(cfg);

        let mut gate: Box<dyn ConfirmationGate> = if *yes {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinPrompt)
        };

        match clear_all(&mut store, &mut session, gate.as_mut())? {
            ClearOutcome::Cleared(n) => {
                ttlog_quiet(
                    store.backend().conn(),
                    "clear",
                    "",
                    &format!("{n} entries deleted"),
                );
                success("All logs have been cleared.");
                println!("{}", render_status(store.current_status()));
            }
            ClearOutcome::Cancelled => info("Operation cancelled."),
        }
    }
    Ok(())
}
