use crate::error::{Result, StockError};
use crate::filter::SortMode;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";

/// Configuration for a stockroom, stored in .stockroom/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Sort mode used when none is requested, and restored by "clear"
    #[serde(default)]
    pub default_sort: SortMode,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name of the product collection file inside the store directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::default(),
            currency: default_currency(),
            data_file: default_data_file(),
        }
    }
}

/// Keys accepted by `stockroom config`.
pub const CONFIG_KEYS: &[&str] = &["default-sort", "currency", "data-file"];

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-sort" => Ok(self.default_sort.to_string()),
            "currency" => Ok(self.currency.clone()),
            "data-file" => Ok(self.data_file.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                self.default_sort = value.parse().map_err(StockError::Config)?;
            }
            "currency" => {
                self.currency = value.to_string();
            }
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(StockError::Config(format!(
                        "data-file must be a plain file name, got \"{}\"",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> StockError {
    StockError::Config(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
