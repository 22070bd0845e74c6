//! Configuration file loading.
//!
//! Both binaries read `lobby.toml` from the working directory unless given
//! `--config`. A missing file yields the defaults; every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// HTTP server settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind. Defaults to "127.0.0.1".
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind. Defaults to 3000.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Requests slower than this are logged as warnings. Defaults to 100.
    #[serde(default = "default_slow_request_ms")]
    pub slow_request_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_slow_request_ms() -> u64 {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            slow_request_ms: default_slow_request_ms(),
        }
    }
}

/// Top-level lobby configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LobbyConfig {
    /// SQLite database file. Defaults to "data/lobby.db".
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data/lobby.db")
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            server: ServerConfig::default(),
        }
    }
}

impl LobbyConfig {
    /// Load the configuration from `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration file path, `lobby.toml`.
    pub fn config_path() -> PathBuf {
        PathBuf::from("lobby.toml")
    }
}
