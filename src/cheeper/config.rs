use crate::commands::testdata::DEFAULT_MESSAGE_COUNT;
use crate::error::{CheeperError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEED_LOGIN: &str = "login_0";

/// Configuration for cheeper, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheeperConfig {
    /// Where the store lives (`file://<dir>` or a directory path).
    /// When unset the per-user data directory is used.
    #[serde(default)]
    pub store_uri: Option<String>,

    /// User that benchmarks write as and read from
    #[serde(default = "default_seed_login")]
    pub seed_login: String,

    /// Messages created by each test data run
    #[serde(default = "default_test_message_count")]
    pub test_message_count: usize,

    /// Message probed by the read benchmark
    #[serde(default)]
    pub probe_message_id: Option<Uuid>,
}

fn default_seed_login() -> String {
    DEFAULT_SEED_LOGIN.to_string()
}

fn default_test_message_count() -> usize {
    DEFAULT_MESSAGE_COUNT
}

impl Default for CheeperConfig {
    fn default() -> Self {
        Self {
            store_uri: None,
            seed_login: default_seed_login(),
            test_message_count: default_test_message_count(),
            probe_message_id: None,
        }
    }
}

impl CheeperConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CheeperError::Config(format!("{}: {}", config_path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| CheeperError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        let to_config_err = |e: &dyn std::fmt::Display| {
            CheeperError::Config(format!("{}: {}", config_dir.display(), e))
        };

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| to_config_err(&e))?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| to_config_err(&e))?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(|e| to_config_err(&e))?;
        Ok(())
    }

    /// Pick the store location: explicit override first, then the config
    /// file, then `fallback`.
    pub fn resolve_store_uri(&self, explicit: Option<String>, fallback: &Path) -> String {
        explicit
            .filter(|uri| !uri.trim().is_empty())
            .or_else(|| self.store_uri.clone())
            .unwrap_or_else(|| fallback.display().to_string())
    }
}
