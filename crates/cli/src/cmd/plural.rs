//! Choose a plural case for a count

use super::Context;
use anyhow::{Context as _, Result};
use m17n_runtime::Cases;

pub async fn run(ctx: &Context, count: f64, cases: &str, offset: f64, ordinal: bool) -> Result<()> {
    let cases: Cases = serde_json::from_str(cases)
        .context("CASES must be a JSON object of case label to text")?;

    let runtime = ctx.runtime();
    let text = if ordinal {
        runtime.ordinal(count, &cases, offset)
    } else {
        runtime.plural(count, &cases, offset)
    };
    println!("{}", text);
    Ok(())
}
