use crate::cli::commands::{new_session, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::{render_status, render_view};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, page } = cmd {
        let store = open_store(cfg)?;
        let mut session = new_session(cfg);
        session.set_filter(period.selector()?);
        // Requested page lands out of range first; recompute clamps it.
        session.change_page(page.saturating_sub(1));

        let view = session.recompute(store.entries());

        header(format!("Logs: {}", session.selector.describe()));
        println!("{}", render_status(view.current_status));
        println!();
        print!("{}", render_view(&view, &session.page));
    }
    Ok(())
}
