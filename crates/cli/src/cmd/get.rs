//! Look up a leaf or subtree

use super::Context;
use crate::document;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

pub async fn run(ctx: &Context, file: &Path, key: &str) -> Result<()> {
    let tree = document::load_tree(file).await?;

    let Some(node) = tree.get(key) else {
        anyhow::bail!("Key not found: {}", key);
    };

    let value = Value::from(node.clone());
    println!("{}", ctx.display(&value)?.trim_end());
    Ok(())
}
