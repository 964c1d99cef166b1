use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                warning("No configuration file yet, run `absencelog init` first.");
                return Ok(());
            }
            let used = ConfigLogic::edit(&path.to_string_lossy(), editor)?;
            success(format!("Configuration file edited successfully using '{used}'"));
        }
    }

    Ok(())
}
