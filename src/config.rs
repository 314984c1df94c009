//! Runtime configuration, read from an optional TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::DEFAULT_QUESTION_COUNT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `<lesson>.json` banks.
    pub data_dir: PathBuf,
    /// Draw size for lessons that do not set their own.
    pub question_count: usize,
    /// How long the "achievement unlocked" banner stays up.
    pub notification_secs: u64,
    /// Length of the tea time break countdown.
    pub tea_time_secs: u64,
    /// Log destination; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            question_count: DEFAULT_QUESTION_COUNT,
            notification_secs: 5,
            tea_time_secs: 30,
            log_file: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn tea_time_duration(&self) -> Duration {
        Duration::from_secs(self.tea_time_secs)
    }
}
