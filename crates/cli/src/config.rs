// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from a TOML file located, in order, at:
//! - the `--config` path given on the command line
//! - the path in `ASGN_CONFIG`
//! - `<config dir>/asgn/config.toml` (e.g. `~/.config/asgn/config.toml`)
//!
//! An explicitly named file must exist. The default location is optional and
//! built-in defaults apply when it is absent.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "asgn";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Days from today used as the due date when none is entered.
    pub default_due_days: u32,
    /// Notes attached to new assignments when none are entered.
    pub default_notes: Option<String>,
    pub log: LogConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive (e.g. "info", "asgn=debug"). `ASGN_LOG` overrides it.
    pub level: String,
    /// Append log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_due_days: 3,
            default_notes: None,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Finds and loads the configuration for this run.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        resolve_from(
            explicit,
            crate::env::config_path().as_deref(),
            default_config_path().as_deref(),
        )
    }
}

/// Returns `<config dir>/asgn/config.toml`, if a config dir is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Lookup order behind [`Config::resolve`], with each location passed in.
pub(crate) fn resolve_from(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
    default_path: Option<&Path>,
) -> Result<Config> {
    if let Some(path) = explicit.or(from_env) {
        return Config::load(path);
    }
    match default_path {
        Some(path) if path.is_file() => Config::load(path),
        _ => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
