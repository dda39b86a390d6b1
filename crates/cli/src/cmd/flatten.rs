//! Print a document as a flat dotted-key mapping

use super::Context;
use crate::document;
use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;

pub async fn run(ctx: &Context, file: &Path) -> Result<()> {
    let tree = document::load_tree(file).await?;
    let flat: Map<String, Value> = tree.flatten().into_iter().collect();
    ctx.print(&Value::Object(flat))
}
