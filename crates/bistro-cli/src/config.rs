//! Configuration management for Bistro CLI
//!
//! Optional settings in ~/.config/bistro/config.toml (or a file given
//! with `--config`): currency label and a custom menu.

use anyhow::{bail, Context, Result};
use bistro::{Catalog, Currency, MenuItem};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "bistro";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub currency: Currency,
    /// Replaces the built-in sample menu when present
    #[serde(default)]
    pub menu: Option<Vec<MenuItem>>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load from an explicit path (which must exist), or from the default
    /// location, or fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            return Self::load_from(path);
        }

        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!(error = %e, "No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        tracing::debug!(path = ?path, custom_menu = config.menu.is_some(), "Config loaded");
        Ok(config)
    }

    /// Set the currency label
    pub fn set_currency(&mut self, label: String) {
        self.currency = Currency::new(label);
    }

    /// Build the catalog: configured menu if any, otherwise the sample menu
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.menu {
            Some(items) => {
                Catalog::from_items(items.clone()).context("Invalid menu in config file")
            }
            None => Ok(Catalog::sample()),
        }
    }
}
