//! Hangout data directory management.

use std::path::PathBuf;

use crate::config::HangoutConfig;
use crate::error::HangoutResult;
use crate::storage::FileStorage;
use crate::store::EventStore;

#[derive(Clone)]
pub struct Hangout {
    config: HangoutConfig,
}

impl Hangout {
    /// Load the global config, writing a commented default on first run.
    pub fn load() -> HangoutResult<Self> {
        let config_path = HangoutConfig::config_path()?;

        if !config_path.exists() {
            HangoutConfig::create_default_config(&config_path)?;
        }

        Ok(Hangout {
            config: HangoutConfig::load_from(&config_path)?,
        })
    }

    pub fn with_config(config: HangoutConfig) -> Self {
        Hangout { config }
    }

    pub fn config(&self) -> &HangoutConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The data directory as configured, keeping `~` unexpanded.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn storage(&self) -> HangoutResult<FileStorage> {
        Ok(FileStorage::open(&self.data_path(), self.config.quota())?)
    }

    pub fn store(&self) -> HangoutResult<EventStore<FileStorage>> {
        Ok(EventStore::new(self.storage()?))
    }
}
