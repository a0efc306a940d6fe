use crate::Result;
use serde::{Deserialize, Serialize};
use shopcat_providers::DEFAULT_API_URL;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog endpoint returning a JSON array of products
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Static snapshot used when the endpoint fails; `<data_dir>/products.json` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_path: Option<PathBuf>,

    /// No timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Idle time after the last keystroke before the search re-runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            fallback_path: None,
            request_timeout_secs: None,
            debounce_ms: default_debounce_ms(),
            currency: default_currency(),
        }
    }
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn resolved_fallback_path(&self, data_dir: &Path) -> PathBuf {
        self.fallback_path
            .clone()
            .unwrap_or_else(|| shopcat_core::default_fallback_path(data_dir))
    }
}
