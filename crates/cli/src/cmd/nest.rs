//! Expand dotted keys of a document into nested objects

use super::Context;
use crate::document;
use anyhow::Result;
use std::path::Path;

pub async fn run(ctx: &Context, file: &Path) -> Result<()> {
    let tree = document::load_tree(file).await?;
    ctx.print(&tree.into_json())
}
