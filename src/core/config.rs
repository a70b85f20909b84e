//! Optional TOML configuration file.
//!
//! Everything here has a built-in default; a missing config file is not an
//! error. Precedence for overlapping settings is CLI flag, then config file,
//! then the defaults in [`crate::core::constants`].

use crate::core::constants::DEFAULT_KNOWN_TOOLS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Tool names whose bare invocation is treated as a command request.
    /// Replaces (not extends) the built-in set when present.
    pub known_tools: Option<Vec<String>>,
    /// Model requested when `--model` is not given.
    pub default_model: Option<String>,
    /// MCP server URL used when `--mcp-server` is not given.
    pub mcp_server: Option<String>,
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse config at {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from_path(&Self::config_path())
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    fn config_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "strikechat", "strikechat")
            .expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }

    /// The effective tool allow-list: the configured one, or the built-ins.
    pub fn known_tools(&self) -> Vec<String> {
        match &self.known_tools {
            Some(tools) => tools.clone(),
            None => DEFAULT_KNOWN_TOOLS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
