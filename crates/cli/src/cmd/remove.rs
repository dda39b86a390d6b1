//! Delete a key, pruning branches left empty

use super::Context;
use crate::document;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::warn;

pub async fn run(ctx: &Context, file: &Path, key: &str, write: bool) -> Result<()> {
    let mut tree = document::load_tree(file).await?;

    if tree.remove(key).is_none() {
        warn!(key, "key not present, nothing removed");
    }

    if write {
        document::save_tree(file, tree, ctx.config.output.pretty).await?;
        eprintln!("{} Removed {} from {}", "✓".green(), key.cyan(), file.display());
        Ok(())
    } else {
        ctx.print(&tree.into_json())
    }
}
