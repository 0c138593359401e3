//! Global hangout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HangoutError, HangoutResult};
use crate::storage::DEFAULT_QUOTA_BYTES;

static DEFAULT_DATA_DIR: &str = "~/.hangout";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_storage_quota() -> u64 {
    DEFAULT_QUOTA_BYTES
}

fn is_default_storage_quota(q: &u64) -> bool {
    *q == DEFAULT_QUOTA_BYTES
}

/// Configuration at ~/.config/hangout/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HangoutConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Bytes of keys plus values the store may hold. 0 means no limit.
    #[serde(
        default = "default_storage_quota",
        skip_serializing_if = "is_default_storage_quota"
    )]
    pub storage_quota: u64,
}

impl Default for HangoutConfig {
    fn default() -> Self {
        HangoutConfig {
            data_dir: default_data_dir(),
            storage_quota: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl HangoutConfig {
    pub fn config_path() -> HangoutResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HangoutError::Config("Could not determine config directory".into()))?
            .join("hangout");

        Ok(config_dir.join("config.toml"))
    }

    /// Read the config file at `path`. Missing keys take their defaults.
    pub fn load_from(path: &Path) -> HangoutResult<Self> {
        ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .build()
            .map_err(|e| HangoutError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HangoutError::Config(e.to_string()))
    }

    /// Quota to hand to storage, `None` when unlimited.
    pub fn quota(&self) -> Option<u64> {
        (self.storage_quota > 0).then_some(self.storage_quota)
    }

    /// Save to `path`, leaving out values that match the defaults.
    pub fn save_to(&self, path: &Path) -> HangoutResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| HangoutError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| HangoutError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HangoutResult<()> {
        let contents = format!(
            "\
# hangout configuration

# Where event data is stored:
# data_dir = \"{}\"

# Maximum bytes of stored events (0 for no limit):
# storage_quota = {}
",
            DEFAULT_DATA_DIR, DEFAULT_QUOTA_BYTES
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HangoutError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HangoutError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hangout/config.toml");

        HangoutConfig::create_default_config(&path).unwrap();
        let config = HangoutConfig::load_from(&path).unwrap();

        assert_eq!(config, HangoutConfig::default());
        assert_eq!(config.quota(), Some(DEFAULT_QUOTA_BYTES));
    }

    #[test]
    fn values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/events\"\nstorage_quota = 0\n").unwrap();

        let config = HangoutConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/events"));
        assert_eq!(config.quota(), None);
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = HangoutConfig {
            data_dir: PathBuf::from("/srv/hangout"),
            storage_quota: 1024,
        };

        config.save_to(&path).unwrap();

        assert_eq!(HangoutConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn defaults_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        HangoutConfig::default().save_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "");
    }
}
