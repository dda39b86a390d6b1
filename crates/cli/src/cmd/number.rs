//! Format a number with the configured locale and currency

use super::Context;
use anyhow::Result;
use m17n_runtime::NumberFormatId;

pub async fn run(ctx: &Context, value: f64, style: Option<&str>) -> Result<()> {
    let id = parse_style(style.unwrap_or_default())?;
    let text = ctx.runtime().number(value, id)?;
    println!("{}", text);
    Ok(())
}

/// Integers select padding or the numeric currency/percent ids; anything
/// else is a named style or currency code
pub fn parse_style(style: &str) -> Result<NumberFormatId> {
    match style.trim().parse::<i64>() {
        Ok(n) => Ok(NumberFormatId::try_from(n)?),
        Err(_) => Ok(NumberFormatId::from(style.trim())),
    }
}
