//! User configuration
//!
//! Read from `<config dir>/cleartui/config.toml`. Every key is optional;
//! a missing file yields the defaults.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cleartool::constants::CLEARTOOL_COMMAND;

/// Errors while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// cleartool binary name or path
    pub executable: PathBuf,

    /// Show success/information notifications
    pub show_information_messages: bool,

    /// Show the error banner when cleartool fails
    pub show_error_messages: bool,

    /// Ask for a comment before co/ci/mkelem (otherwise `-nc`)
    pub action_comment_dialog: bool,

    pub status_bar: StatusBarConfig,

    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(CLEARTOOL_COMMAND),
            show_information_messages: true,
            show_error_messages: true,
            action_comment_dialog: true,
            status_bar: StatusBarConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Status bar item toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusBarConfig {
    pub show_file_state: bool,
    pub show_file_info: bool,
    pub show_view_status: bool,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            show_file_state: true,
            show_file_info: true,
            show_view_status: true,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; `None` falls back to the cache directory
    pub file: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `info` or `cleartui=debug`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from [`Config::default_path`] when `None`
    ///
    /// An explicitly given path must exist; a missing default file yields
    /// the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `<config dir>/cleartui/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cleartui").join("config.toml"))
    }
}
