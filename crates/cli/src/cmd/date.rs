//! Format an RFC 3339 timestamp in one of the preset styles

use super::Context;
use anyhow::{Context as _, Result};
use chrono::DateTime;
use m17n_runtime::DateStyle;

pub async fn run(ctx: &Context, timestamp: &str, style: usize) -> Result<()> {
    let value = DateTime::parse_from_rfc3339(timestamp)
        .with_context(|| format!("Invalid RFC 3339 timestamp: {}", timestamp))?;
    let style = DateStyle::try_from(style)?;

    println!("{}", ctx.runtime().date_time(&value, style));
    Ok(())
}
