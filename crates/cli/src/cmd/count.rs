//! Count leaves

use crate::document;
use anyhow::Result;
use std::path::Path;

pub async fn run(file: &Path) -> Result<()> {
    let tree = document::load_tree(file).await?;
    println!("{}", tree.len());
    Ok(())
}
