//
//  teamcity-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Configuration for the `tc` command-line tool, stored as TOML in a
//! platform-specific directory:
//!
//! - **Linux**: `~/.config/tc/config.toml`
//! - **macOS**: `~/Library/Application Support/tc/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\tc\config.toml`
//!
//! The library itself needs no configuration file; a
//! [`TeamCityClient`](crate::api::TeamCityClient) is built from a URL and an
//! [`Authorizer`](crate::auth::Authorizer).
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! output = "table"
//! timeout = 30
//!
//! [server]
//! url = "https://ci.example.com"
//! username = "jdoe"
//! guest = false
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use teamcity_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("url", "https://ci.example.com")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`server`]: Server connection settings and URL normalization

mod file;
mod server;

pub use file::*;
pub use server::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["output", "timeout", "url", "username", "guest"];

/// Complete configuration of the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General CLI behaviour.
    #[serde(default)]
    pub core: CoreConfig,

    /// TeamCity server connection.
    #[serde(default)]
    pub server: ServerConfig,
}

/// General CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Default output format: "table" or "json".
    #[serde(default = "default_output")]
    pub output: String,

    /// Request timeout in seconds. Unset means the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path of the configuration file.
    ///
    /// `TC_CONFIG` overrides the platform location.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os("TC_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "tc")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value by key as a string.
    ///
    /// Returns `None` for unknown keys and unset values.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output" => Some(self.core.output.clone()),
            "timeout" => self.core.timeout.map(|t| t.to_string()),
            "url" => self.server.url.clone(),
            "username" => self.server.username.clone(),
            "guest" => Some(self.server.guest.to_string()),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys and for values that do not parse
    /// (`timeout` must be a number of seconds, `guest` a boolean,
    /// `output` one of "table" or "json").
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output" => match value {
                "table" | "json" => self.core.output = value.to_string(),
                _ => bail!("output must be 'table' or 'json', got '{}'", value),
            },
            "timeout" => {
                let secs = value
                    .parse::<u64>()
                    .with_context(|| format!("timeout must be a number of seconds, got '{}'", value))?;
                self.core.timeout = Some(secs);
            }
            "url" => self.server.url = Some(normalize_server_url(value)),
            "username" => self.server.username = Some(value.to_string()),
            "guest" => {
                self.server.guest = value
                    .parse::<bool>()
                    .with_context(|| format!("guest must be 'true' or 'false', got '{}'", value))?;
            }
            _ => bail!("Unknown configuration key '{}' (known keys: {})", key, CONFIG_KEYS.join(", ")),
        }
        Ok(())
    }
}
