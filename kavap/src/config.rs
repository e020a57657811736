//! Configuration for the kavap CLI.
//!
//! Settings come from `kavap.toml`, looked up in the current directory, then
//! `~/.config/kavap/`, then the platform configuration directory. Missing keys take their
//! defaults.

use dirs::{config_dir, home_dir};
use kava_symbols::{SymbolTableConfig, DEFAULT_INITIAL_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KavapError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kavap.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Symbol table sizing.
    #[serde(default)]
    pub symbols: SymbolsConfig,

    /// Defaults for `kavap erase`.
    #[serde(default)]
    pub erase: EraseConfig,

    /// Defaults for `kavap check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Sizing of the per-run symbol table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolsConfig {
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Lock shards; left to the map when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_amount: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EraseConfig {
    /// Keep the trailing parameter unerased.
    #[serde(default)]
    pub keep_last_arg: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Read field types as Java-language names (`java.lang.String`, `int`).
    #[serde(default)]
    pub dotted_names: bool,
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            shard_amount: None,
        }
    }
}

impl SymbolsConfig {
    /// Library settings for the table this run builds.
    pub fn table_config(&self) -> SymbolTableConfig {
        SymbolTableConfig {
            initial_capacity: self.initial_capacity,
            shard_amount: self.shard_amount,
            ..SymbolTableConfig::default()
        }
    }
}

impl Config {
    /// Load configuration from the default locations, or defaults if none exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KavapError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| KavapError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| KavapError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("kavap").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("kavap").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
