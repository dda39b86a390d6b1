//! m17n CLI - m17n command

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use m17n_cli::cmd::{self, Context};
use m17n_cli::config;
use m17n_cli::document::DocumentFormat;
use std::path::PathBuf;
use tracing::Level;

/// m17n - Dotted-key message trees and locale formatting
#[derive(Parser)]
#[command(name = "m17n")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/m17n/config.toml)
    #[arg(long, global = true, env = "M17N_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output format for documents
    #[arg(long, global = true, value_enum)]
    format: Option<DocumentFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a document as a flat dotted-key mapping
    Flatten {
        file: PathBuf,
    },
    /// Expand dotted keys into nested objects
    Nest {
        file: PathBuf,
    },
    /// Print the leaf or subtree at KEY (exit 1 if missing)
    Get {
        file: PathBuf,
        key: String,
    },
    /// Set KEY to VALUE (parsed as JSON, else taken as a string)
    Set {
        file: PathBuf,
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Write the result back to FILE instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// Remove KEY, pruning emptied branches
    Remove {
        file: PathBuf,
        key: String,
        /// Write the result back to FILE instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// List leaf keys in sorted order
    Keys {
        file: PathBuf,
    },
    /// Print the N-th leaf key in sorted order
    Key {
        file: PathBuf,
        n: usize,
    },
    /// Count leaves
    Count {
        file: PathBuf,
    },
    /// Merge overlays into BASE, later files winning
    Merge {
        base: PathBuf,
        #[arg(required = true)]
        overlays: Vec<PathBuf>,
        /// Write the merged document here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a catalog message
    Translate {
        catalog: PathBuf,
        key: String,
        /// Message arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
    /// Choose a plural case (CASES is a JSON object)
    Plural {
        #[arg(allow_negative_numbers = true)]
        count: f64,
        cases: String,
        /// Subtracted from COUNT before choosing a category
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f64,
        /// Use ordinal rules
        #[arg(long)]
        ordinal: bool,
    },
    /// Format a number
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// decimal, percent, currency, an ISO 4217 code, digits, -1 or -2
        #[arg(long, allow_hyphen_values = true)]
        style: Option<String>,
    },
    /// Format an RFC 3339 timestamp
    Date {
        timestamp: String,
        /// Preset 0-7: short/medium/long/full date, then the same for time
        #[arg(long, default_value_t = 0)]
        style: usize,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (config, source) = config::load(cli.config.as_deref()).await?;
    tracing::debug!(%source, "loaded configuration");
    let ctx = Context::new(config, source, cli.format);

    match cli.command {
        Commands::Flatten { file } => cmd::flatten::run(&ctx, &file).await,
        Commands::Nest { file } => cmd::nest::run(&ctx, &file).await,
        Commands::Get { file, key } => cmd::get::run(&ctx, &file, &key).await,
        Commands::Set { file, key, value, write } => {
            cmd::set::run(&ctx, &file, &key, &value, write).await
        }
        Commands::Remove { file, key, write } => cmd::remove::run(&ctx, &file, &key, write).await,
        Commands::Keys { file } => cmd::keys::run(&file).await,
        Commands::Key { file, n } => cmd::keys::run_nth(&file, n).await,
        Commands::Count { file } => cmd::count::run(&file).await,
        Commands::Merge { base, overlays, output } => {
            cmd::merge::run(&ctx, &base, &overlays, output.as_deref()).await
        }
        Commands::Translate { catalog, key, args } => {
            cmd::translate::run(&ctx, &catalog, &key, args.as_deref()).await
        }
        Commands::Plural { count, cases, offset, ordinal } => {
            cmd::plural::run(&ctx, count, &cases, offset, ordinal).await
        }
        Commands::Number { value, style } => {
            cmd::number::run(&ctx, value, style.as_deref()).await
        }
        Commands::Date { timestamp, style } => cmd::date::run(&ctx, &timestamp, style).await,
        Commands::Config => cmd::config::run(&ctx).await,
    }
}
