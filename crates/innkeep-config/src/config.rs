//! Stores the hotel layout and monitor settings. All fields are optional;
//! a missing file yields the defaults.
//!
//! ```toml
//! [hotel]
//! rooms = [101, 102, 103, 104, 105]
//!
//! [monitor]
//! interval_seconds = 60
//! history_len = 20
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "INNKEEP_CONFIG";

const DEFAULT_INTERVAL_SECONDS: u64 = 60;
const DEFAULT_HISTORY_LEN: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnkeepConfig {
    #[serde(default)]
    pub hotel: HotelConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelConfig {
    /// Room numbers, in allocation order.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<u32>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between availability scans.
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
    /// Number of scans kept in the in-memory history.
    #[serde(default = "default_history_len")]
    pub history_len: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
            history_len: default_history_len(),
        }
    }
}

fn default_rooms() -> Vec<u32> {
    (101..=105).collect()
}

fn default_interval_seconds() -> u64 {
    DEFAULT_INTERVAL_SECONDS
}

fn default_history_len() -> usize {
    DEFAULT_HISTORY_LEN
}

impl InnkeepConfig {
    /// Load from `$INNKEEP_CONFIG` if set, else from the user config file.
    ///
    /// Returns `Default` if the user config file does not exist or if the
    /// config directory cannot be determined (e.g., no HOME in containers).
    /// A path named by `$INNKEEP_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(Self::default()),
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Path to the user config file: `~/.config/innkeep/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "innkeep")
            .context("Failed to determine config directory")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.interval_seconds)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
