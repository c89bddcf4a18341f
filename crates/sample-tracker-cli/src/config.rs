//! CLI configuration: optional JSON file, then environment, then flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sample_tracker_core::{DashboardConfig, Theme};

pub const ENV_FIXTURE: &str = "SAMPLE_TRACKER_FIXTURE";
pub const ENV_THEME: &str = "SAMPLE_TRACKER_THEME";
pub const ENV_LOG: &str = "SAMPLE_TRACKER_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Fixture file; the bundled data is used when unset
    pub fixture: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub dashboard: DashboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture: None,
            log_level: "warn".to_string(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path` (if any) and apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply overrides from an environment lookup.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(fixture) = lookup(ENV_FIXTURE).filter(|v| !v.is_empty()) {
            self.fixture = Some(PathBuf::from(fixture));
        }
        if let Some(theme) = lookup(ENV_THEME).filter(|v| !v.is_empty()) {
            self.dashboard.theme = theme
                .parse::<Theme>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_THEME,
                    value: theme.clone(),
                })?;
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        Ok(self)
    }
}
