//! Loading and rendering JSON/TOML documents

use anyhow::{Context, Result};
use m17n_core::PathTree;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Serialization format of a document on disk or on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Toml,
}

impl DocumentFormat {
    /// TOML for a `.toml` extension, JSON otherwise
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }

    pub fn parse(self, text: &str) -> Result<Value> {
        match self {
            DocumentFormat::Json => serde_json::from_str(text).context("Invalid JSON document"),
            DocumentFormat::Toml => toml::from_str(text).context("Invalid TOML document"),
        }
    }

    /// Serialize `value`; TOML requires a table at the top level
    pub fn render(self, value: &Value, pretty: bool) -> Result<String> {
        match self {
            DocumentFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
            DocumentFormat::Json => Ok(serde_json::to_string(value)?),
            DocumentFormat::Toml => {
                let text = if pretty {
                    toml::to_string_pretty(value)
                } else {
                    toml::to_string(value)
                };
                text.context("Value cannot be represented as TOML")
            }
        }
    }
}

/// Text to print for a single looked-up value
///
/// Strings print raw, objects in `format`, everything else as JSON.
pub fn display_value(value: &Value, format: DocumentFormat, pretty: bool) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Object(_) => format.render(value, pretty),
        other => Ok(other.to_string()),
    }
}

/// Read a document, picking the format from its extension
pub async fn load_value(path: &Path) -> Result<Value> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    DocumentFormat::from_path(path)
        .parse(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Read a document whose root must be an object, as a path tree
pub async fn load_tree(path: &Path) -> Result<PathTree<Value>> {
    let value = load_value(path).await?;
    tree_from_value(value).with_context(|| format!("Failed to load {}", path.display()))
}

pub fn tree_from_value(value: Value) -> Result<PathTree<Value>> {
    if !value.is_object() {
        anyhow::bail!("Document root must be an object");
    }
    Ok(PathTree::from_json(value)?)
}

/// Write `tree` back in the format implied by the extension
pub async fn save_tree(path: &Path, tree: PathTree<Value>, pretty: bool) -> Result<()> {
    let mut text = DocumentFormat::from_path(path).render(&tree.into_json(), pretty)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
