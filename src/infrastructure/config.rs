//! Configuration management

use crate::domain::RangeOrder;
use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_LATEST_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How "list by period" compares its bounds with stored dates
    pub range_order: RangeOrder,
    /// Window used by "list latest entries"
    pub latest_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            range_order: RangeOrder::default(),
            latest_days: DEFAULT_LATEST_DAYS,
        }
    }
}

impl Config {
    /// Load config.toml from the data directory, falling back to defaults
    /// when the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(DiaryError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config.toml into the data directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DiaryError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }
}
