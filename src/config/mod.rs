//
//  clumio-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration
//!
//! Settings shared by every client built from the `clumio` CLI, stored as TOML.
//!
//! ## File Location
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/clumio/config.toml` |
//! | macOS | `~/Library/Application Support/clumio/config.toml` |
//! | Windows | `%APPDATA%\clumio\config\config.toml` |
//!
//! The `CLUMIO_CONFIG` environment variable points to a different file.
//!
//! ## Example File
//!
//! ```toml
//! [core]
//! base_path = "https://us-east-1.api.clumio.com"
//! organizational_unit = "00000000-0000-0000-0000-000000000000"
//! raw_response = false
//! timeout_secs = 30
//!
//! [headers]
//! x-request-source = "nightly-audit"
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Key |
//! |----------|-----|
//! | `CLUMIO_API_BASE_PATH` | `base_path` |
//! | `CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT` | `organizational_unit` |
//! | `CLUMIO_RAW_RESPONSE` | `raw_response` |
//!
//! API tokens are never stored here; see [`crate::auth`].

mod file;
mod regions;

pub use file::*;
pub use regions::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "CLUMIO_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`], besides `header.<name>`.
pub const CONFIG_KEYS: &[&str] = &[
    "base_path",
    "region",
    "organizational_unit",
    "raw_response",
    "timeout_secs",
];

/// Persistent configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// API base path, e.g. `https://us-west-2.api.clumio.com`.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Organizational unit sent as `x-clumio-organizationalunit-context`.
    #[serde(default)]
    pub organizational_unit: Option<String>,

    /// Return untouched responses instead of failing on non-2xx statuses.
    #[serde(default)]
    pub raw_response: bool,

    /// Request timeout; no timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            organizational_unit: None,
            raw_response: false,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads the configuration file, or defaults if there is none, then applies environment
    /// overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Loads a configuration file without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "clumio")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies `CLUMIO_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`, which maps environment variable names to values.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(base_path) = lookup("CLUMIO_API_BASE_PATH").filter(|v| !v.trim().is_empty()) {
            self.core.base_path = base_path.trim().to_string();
        }
        if let Some(ou) =
            lookup("CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT").filter(|v| !v.trim().is_empty())
        {
            self.core.organizational_unit = Some(ou.trim().to_string());
        }
        if let Some(raw) = lookup("CLUMIO_RAW_RESPONSE") {
            self.core.raw_response =
                parse_bool(&raw).context("Invalid CLUMIO_RAW_RESPONSE value")?;
        }
        Ok(())
    }

    /// Returns the value of a configuration key as text.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(name) = key.strip_prefix("header.") {
            return self.headers.get(name).cloned();
        }
        match key {
            "base_path" => Some(self.core.base_path.clone()),
            "region" => region_for_base_path(&self.core.base_path).map(str::to_string),
            "organizational_unit" => self.core.organizational_unit.clone(),
            "raw_response" => Some(self.core.raw_response.to_string()),
            "timeout_secs" => self.core.timeout_secs.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// Sets a configuration key from text.
    ///
    /// Setting `region` stores the region's base path.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys and for values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(name) = key.strip_prefix("header.") {
            if name.is_empty() {
                bail!("Header name is empty");
            }
            self.headers.insert(name.to_lowercase(), value.to_string());
            return Ok(());
        }
        match key {
            "base_path" => {
                self.core.base_path = normalize_base_path(value)?
                    .as_str()
                    .trim_end_matches('/')
                    .to_string();
            }
            "region" => {
                let base_path = region_base_path(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown region: {}", value))?;
                self.core.base_path = base_path.to_string();
            }
            "organizational_unit" => self.core.organizational_unit = Some(value.to_string()),
            "raw_response" => self.core.raw_response = parse_bool(value)?,
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid timeout: {}", value))?;
                self.core.timeout_secs = Some(secs);
            }
            _ => bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    /// Clears an optional key, or resets a required key to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        if let Some(name) = key.strip_prefix("header.") {
            self.headers.remove(name);
            return Ok(());
        }
        match key {
            "base_path" | "region" => self.core.base_path = default_base_path(),
            "organizational_unit" => self.core.organizational_unit = None,
            "raw_response" => self.core.raw_response = false,
            "timeout_secs" => self.core.timeout_secs = None,
            _ => bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Expected a boolean, got {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.core.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.get("region").as_deref(), Some("us-west-2"));
        assert_eq!(config.get("raw_response").as_deref(), Some("false"));
        assert_eq!(config.get("timeout_secs"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("region", "eu-central-1").unwrap();
        assert_eq!(config.core.base_path, "https://eu-central-1.de.api.clumio.com");

        config.set("base_path", "us-east-1.api.clumio.com/").unwrap();
        assert_eq!(config.core.base_path, "https://us-east-1.api.clumio.com");
        assert_eq!(config.get("region").as_deref(), Some("us-east-1"));

        config.set("raw_response", "yes").unwrap();
        assert!(config.core.raw_response);

        config.set("header.X-Request-Source", "audit").unwrap();
        assert_eq!(config.get("header.x-request-source").as_deref(), Some("audit"));

        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("region", "mars-1").is_err());
        assert!(config.set("editor", "vim").is_err());

        config.unset("raw_response").unwrap();
        assert!(!config.core.raw_response);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("CLUMIO_API_BASE_PATH", "http://127.0.0.1:9999"),
            ("CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT", "ou-7"),
            ("CLUMIO_RAW_RESPONSE", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.core.base_path, "http://127.0.0.1:9999");
        assert_eq!(config.core.organizational_unit.as_deref(), Some("ou-7"));
        assert!(config.core.raw_response);

        let mut config = Config::default();
        assert!(config
            .apply_overrides(|name| (name == "CLUMIO_RAW_RESPONSE").then(|| "maybe".to_string()))
            .is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let mut config = Config::default();
        config.set("organizational_unit", "ou-1").unwrap();
        config.set("timeout_secs", "30").unwrap();
        config.set("header.x-trace", "1").unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[core]\nraw_response = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.core.raw_response);
        assert_eq!(config.core.base_path, DEFAULT_BASE_PATH);
    }
}
