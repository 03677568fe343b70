//
//  clumio-sdk
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the configuration file. `get` and `list` show the effective values,
//! including `CLUMIO_*` environment overrides; `set` and `unset` only touch the file.
//! Keys are the `[core]` settings plus `header.<name>` for custom headers.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, CONFIG_KEYS};
use crate::output::write_json;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(KeyArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(KeyArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key (base_path, region, organizational_unit, raw_response,
    /// timeout_secs or header.<name>)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => get(args, global),
            ConfigSubcommand::Set(args) => set(args, global),
            ConfigSubcommand::Unset(args) => unset(args, global),
            ConfigSubcommand::List => list(global),
            ConfigSubcommand::Path => path(global),
        }
    }
}

fn check_key(key: &str) -> Result<()> {
    if CONFIG_KEYS.contains(&key) || key.starts_with("header.") {
        return Ok(());
    }
    bail!(
        "Unknown config key: {}. Valid keys: {}, header.<name>",
        key,
        CONFIG_KEYS.join(", ")
    )
}

/// Configuration file contents without environment overrides.
fn load_file() -> Result<Config> {
    Config::load_from(&Config::config_path()?)
}

fn get(args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    let config = Config::load()?;
    let value = config.get(&args.key);

    if global.json {
        return write_json(&serde_json::json!({ "key": args.key, "value": value }));
    }

    match value {
        Some(value) => println!("{}", value),
        None => bail!("{} is not set", args.key),
    }
    Ok(())
}

fn set(args: &SetArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    let mut config = load_file()?;
    config.set(&args.key, &args.value)?;
    config.save()?;

    global.writer().write_success(&format!(
        "Set {} to {}",
        args.key,
        config.get(&args.key).unwrap_or_else(|| args.value.clone())
    ));
    Ok(())
}

fn unset(args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    let mut config = load_file()?;
    config.unset(&args.key)?;
    config.save()?;

    global
        .writer()
        .write_success(&format!("Unset {}", args.key));
    Ok(())
}

fn entries(config: &Config) -> Vec<(String, Option<String>)> {
    CONFIG_KEYS
        .iter()
        .map(|key| (key.to_string(), config.get(key)))
        .chain(
            config
                .headers
                .iter()
                .map(|(name, value)| (format!("header.{}", name), Some(value.clone()))),
        )
        .collect()
}

fn list(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let entries = entries(&config);

    if global.json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, value)| (key, value.map_or(serde_json::Value::Null, Into::into)))
            .collect();
        return write_json(&map);
    }

    for (key, value) in entries {
        match value {
            Some(value) => println!("{}={}", style(key).cyan(), value),
            None => println!("{}={}", style(key).cyan(), style("(not set)").dim()),
        }
    }
    Ok(())
}

fn path(global: &GlobalOptions) -> Result<()> {
    let path = Config::config_path()?;
    if global.json {
        return write_json(&serde_json::json!({
            "path": path,
            "exists": path.is_file(),
        }));
    }
    println!("{}", path.display());
    Ok(())
}
