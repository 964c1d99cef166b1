use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let lines = LogLogic::render_log(&pool.conn)?;

        println!("📜 Internal log:\n");
        for line in lines {
            println!("{line}");
        }
    }

    Ok(())
}
