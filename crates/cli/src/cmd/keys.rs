//! List leaf keys in sorted order

use crate::document;
use anyhow::Result;
use std::path::Path;

pub async fn run(file: &Path) -> Result<()> {
    let tree = document::load_tree(file).await?;
    for key in tree.keys() {
        println!("{}", key);
    }
    Ok(())
}

/// Print the `n`-th key in sorted order
pub async fn run_nth(file: &Path, n: usize) -> Result<()> {
    let tree = document::load_tree(file).await?;
    match tree.key(n) {
        Some(key) => {
            println!("{}", key);
            Ok(())
        }
        None => anyhow::bail!("Index {} out of range ({} keys)", n, tree.len()),
    }
}
