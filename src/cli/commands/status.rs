use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::render_status;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    println!("{}", render_status(store.current_status()));

    if let Some(last) = store.last() {
        println!(
            "Last entry: {} at {}",
            last.kind,
            last.local_time().format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}
