use crate::errors::{AppError, AppResult};
use crate::location::DEFAULT_LOCATION_TIMEOUT_MS;
use crate::models::page::DEFAULT_PAGE_SIZE;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_location_timeout_ms")]
    pub location_timeout_ms: u64,
    /// Shell command printing a JSON location fix. Unset ⇒ no location.
    #[serde(default)]
    pub location_command: Option<String>,
    /// Default directory for exports (current directory when unset).
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_location_timeout_ms() -> u64 {
    DEFAULT_LOCATION_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            page_size: default_page_size(),
            location_timeout_ms: default_location_timeout_ms(),
            location_command: None,
            export_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("absencelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".absencelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("absencelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("absencelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        if cfg.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        Ok(cfg)
    }

    pub fn export_dir(&self) -> PathBuf {
        match &self.export_dir {
            Some(d) => expand_tilde(d),
            None => PathBuf::from("."),
        }
    }

    /// Initialize configuration directory and file.
    /// `custom_db` may be relative (resolved inside the config dir).
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}
