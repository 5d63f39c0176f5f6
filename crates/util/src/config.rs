//! User configuration for the sidenav CLI/TUI.
//!
//! The file lives at `<config_dir>/sidenav/config.json` unless
//! `SIDENAV_CONFIG_PATH` points elsewhere. A missing file yields defaults; a
//! malformed one is logged and ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sidenav_types::{ExternalLink, default_external_links};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::{app_config_dir, expand_tilde};

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "SIDENAV_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default filename for the TUI log file, next to the config file.
pub const LOG_FILE_NAME: &str = "sidenav.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidenavConfig {
    /// Route table used when no `--routes` argument is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table: Option<String>,
    /// Replaces the built-in repository/documentation links when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_links: Option<Vec<ExternalLink>>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl SidenavConfig {
    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => Ok(config),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse config file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(ConfigError::Io(error)),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Configured route table path with `~` expanded.
    pub fn route_table_path(&self) -> Option<PathBuf> {
        self.route_table
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(expand_tilde)
    }

    pub fn external_links(&self) -> Vec<ExternalLink> {
        self.external_links.clone().unwrap_or_else(default_external_links)
    }
}

/// Config file path, honouring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }
    app_config_dir().join(CONFIG_FILE_NAME)
}

/// Where the TUI writes its log, alongside the config file.
pub fn default_log_path() -> PathBuf {
    default_config_path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(app_config_dir)
        .join(LOG_FILE_NAME)
}
