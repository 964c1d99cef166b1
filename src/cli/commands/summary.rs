use crate::cli::commands::{new_session, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::render_summary;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let store = open_store(cfg)?;
        let mut session = new_session(cfg);
        session.set_filter(period.selector()?);

        let view = session.recompute(store.entries());

        println!("Summary for {}", session.selector.describe());
        println!("{}", render_summary(&view.summary));
    }
    Ok(())
}
