//! Configuration for the rollcall application.
//!
//! Settings live in `config.json` inside the per-OS application data
//! directory (see [`DataStorage`]). A missing file is not an error: every
//! section has defaults, and a partially written file is completed with them.
//!
//! ## Sections
//!
//! - **database**: file location, pool size and the two timeouts that bound
//!   a unit of work (waiting for a pooled connection, waiting for a lock)
//! - **log**: level and format of the `tracing` output in debug mode
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.database.pool_size = 4;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::logging::LogConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Connection pool and storage settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file. `None` places `rollcall.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Maximum number of pooled connections.
    pub pool_size: u32,

    /// How long a unit of work waits for a free pooled connection.
    pub connection_timeout_ms: u64,

    /// How long a statement waits on a locked database before failing.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: None,
            pool_size: 8,
            connection_timeout_ms: 5_000,
            busy_timeout_ms: 5_000,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl Config {
    /// Reads the configuration from the data directory, or defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved configuration file, if any.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup, starting from the saved values.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        let current_path = config
            .database
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let path: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current_path)
            .allow_empty(true)
            .interact_text()?;
        config.database.path = if path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(path.trim()))
        };

        config.database.pool_size = Input::with_theme(&theme)
            .with_prompt(Message::PromptPoolSize.to_string())
            .default(config.database.pool_size)
            .validate_with(|size: &u32| if *size > 0 { Ok(()) } else { Err(Message::PoolSizeRange.to_string()) })
            .interact_text()?;

        config.database.connection_timeout_ms = Input::with_theme(&theme)
            .with_prompt(Message::PromptConnectionTimeout.to_string())
            .default(config.database.connection_timeout_ms)
            .interact_text()?;

        config.database.busy_timeout_ms = Input::with_theme(&theme)
            .with_prompt(Message::PromptBusyTimeout.to_string())
            .default(config.database.busy_timeout_ms)
            .interact_text()?;

        config.log.level = Input::with_theme(&theme)
            .with_prompt(Message::PromptLogLevel.to_string())
            .default(config.log.level.clone())
            .interact_text()?;

        Ok(config)
    }
}
