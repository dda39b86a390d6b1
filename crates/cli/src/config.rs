//! CLI configuration
//!
//! Loaded from, in order of precedence:
//! 1. `--config <path>` or `M17N_CONFIG` (the file must exist)
//! 2. `<config dir>/m17n/config.toml` if present
//! 3. Built-in defaults

use crate::document::DocumentFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub output: OutputConfig,
}

/// `[locale]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// BCP 47 tag used for formatting
    pub tag: String,
    /// Default ISO 4217 currency
    pub currency: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            tag: "en-US".to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: DocumentFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Json,
            pretty: true,
        }
    }
}

impl Config {
    /// Parse and validate TOML text
    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.locale.tag.trim().is_empty() {
            anyhow::bail!("locale.tag must not be empty");
        }
        let currency = &self.locale.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            anyhow::bail!(
                "locale.currency must be a three-letter ISO 4217 code, got '{}'",
                currency
            );
        }
        Ok(())
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line or via `M17N_CONFIG`
    Explicit(PathBuf),
    /// Per-user config file
    User(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::User(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Per-user config file location
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("m17n").join("config.toml"))
}

/// Resolve and load the configuration
pub async fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let config = read(path).await?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    if let Some(path) = config_file_path() {
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let config = read(&path).await?;
            return Ok((config, ConfigSource::User(path)));
        }
    }

    Ok((Config::default(), ConfigSource::Defaults))
}

async fn read(path: &Path) -> Result<Config> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Config::parse(&text).with_context(|| format!("Invalid config: {}", path.display()))
}
