// SPDX-License-Identifier: MPL-2.0
//! This module handles the subsystem's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use vine_lens::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.analysis_timeout_secs = Some(45);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "VineLens";

/// Upper bound on analysis latency when no override is configured.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Upper bound on a single analysis call, in seconds.
    #[serde(default)]
    pub analysis_timeout_secs: Option<u64>,
    /// Analysis service endpoint override.
    #[serde(default)]
    pub service_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            analysis_timeout_secs: Some(DEFAULT_ANALYSIS_TIMEOUT_SECS),
            service_url: None,
        }
    }
}

impl Config {
    /// The effective analysis timeout. Unbounded waits are never allowed, so
    /// an absent value falls back to the default bound.
    #[must_use]
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(
            self.analysis_timeout_secs
                .unwrap_or(DEFAULT_ANALYSIS_TIMEOUT_SECS),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
