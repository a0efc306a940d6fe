// NOTE: Command Organization
//
// Catalog reads (list, show, categories, export, browse) are top-level verbs.
// Preference writes are grouped under `fav` and `theme`, mirroring the two
// persisted entries.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shopcat")]
#[command(about = "Browse a product catalog: search, filter, sort and favorite", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $SHOPCAT_PATH or the platform data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Override the catalog endpoint from config.toml")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Override the fallback snapshot path from config.toml")]
    pub fallback: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
