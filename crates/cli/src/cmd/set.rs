//! Store a value under a dotted key

use super::Context;
use crate::document;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub async fn run(ctx: &Context, file: &Path, key: &str, raw: &str, write: bool) -> Result<()> {
    let mut tree = document::load_tree(file).await?;
    let value = parse_value(raw);
    debug!(key, %value, "setting value");

    tree.set(key, value)?;

    if write {
        document::save_tree(file, tree, ctx.config.output.pretty).await?;
        eprintln!("{} Set {} in {}", "✓".green(), key.cyan(), file.display());
        Ok(())
    } else {
        ctx.print(&tree.into_json())
    }
}

/// JSON if `raw` parses as JSON, otherwise the literal string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
