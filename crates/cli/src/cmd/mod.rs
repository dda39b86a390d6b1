//! CLI command implementations

pub mod config;
pub mod count;
pub mod date;
pub mod flatten;
pub mod get;
pub mod keys;
pub mod merge;
pub mod nest;
pub mod number;
pub mod plural;
pub mod remove;
pub mod set;
pub mod translate;

use crate::config::{Config, ConfigSource};
use crate::document::{self, DocumentFormat};
use anyhow::Result;
use m17n_runtime::{plural::english, M17n};
use serde_json::Value;

/// State shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub source: ConfigSource,
    /// Output format after applying `--format`
    pub format: DocumentFormat,
}

impl Context {
    pub fn new(config: Config, source: ConfigSource, format: Option<DocumentFormat>) -> Self {
        let format = format.unwrap_or(config.output.format);
        Self {
            config,
            source,
            format,
        }
    }

    /// Runtime for the configured locale and currency, English plural rules
    pub fn runtime(&self) -> M17n {
        M17n::new(
            self.config.locale.tag.clone(),
            self.config.locale.currency.clone(),
            english,
        )
    }

    /// Serialize a whole document in the output format
    pub fn render(&self, value: &Value) -> Result<String> {
        self.format.render(value, self.config.output.pretty)
    }

    /// Serialize a single looked-up value
    pub fn display(&self, value: &Value) -> Result<String> {
        document::display_value(value, self.format, self.config.output.pretty)
    }

    /// Print a whole document to stdout
    pub fn print(&self, value: &Value) -> Result<()> {
        println!("{}", self.render(value)?.trim_end());
        Ok(())
    }
}
