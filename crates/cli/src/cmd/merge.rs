//! Merge overlay documents into a base document
//!
//! Overlays are applied left to right; later leaves win.

use super::Context;
use crate::document;
use anyhow::{Context as _, Result};
use m17n_core::Node;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(
    ctx: &Context,
    base: &Path,
    overlays: &[PathBuf],
    output: Option<&Path>,
) -> Result<()> {
    let mut tree = document::load_tree(base).await?;

    for overlay in overlays {
        let Value::Object(map) = document::load_value(overlay).await? else {
            anyhow::bail!("Overlay root must be an object: {}", overlay.display());
        };
        tree.merge(map.into_iter().map(|(key, value)| (key, Node::from(value))))
            .with_context(|| format!("Failed to merge {}", overlay.display()))?;
        info!(overlay = %overlay.display(), leaves = tree.len(), "merged overlay");
    }

    match output {
        Some(path) => {
            let leaves = tree.len();
            document::save_tree(path, tree, ctx.config.output.pretty).await?;
            eprintln!(
                "{} Wrote {} ({} keys)",
                "✓".green(),
                path.display().to_string().cyan(),
                leaves
            );
            Ok(())
        }
        None => ctx.print(&tree.into_json()),
    }
}
