//! Show the effective configuration

use super::Context;
use crate::config::config_file_path;
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    println!("{}", "Configuration".bold());
    println!("{}: {}", "Source".dimmed(), ctx.source.to_string().dimmed());
    if let Some(path) = config_file_path() {
        println!("{}: {}\n", "User file".dimmed(), path.display().dimmed());
    } else {
        println!();
    }

    println!("{}", "[locale]".yellow());
    println!("  {} = {:?}", "tag".cyan(), config.locale.tag);
    println!("  {} = {:?}", "currency".cyan(), config.locale.currency);

    println!("\n{}", "[output]".yellow());
    println!(
        "  {} = {:?} {}",
        "format".cyan(),
        format!("{:?}", config.output.format).to_lowercase(),
        if ctx.format != config.output.format {
            format!("(overridden: {:?})", ctx.format).dimmed().to_string()
        } else {
            String::new()
        }
    );
    println!("  {} = {}", "pretty".cyan(), config.output.pretty);

    Ok(())
}
