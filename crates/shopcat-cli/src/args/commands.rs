use super::common::{CriteriaArgs, ViewModeArgs};
use super::enums::ThemeArg;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default config.toml to the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },

    #[command(about = "List products matching the given filters")]
    List {
        #[command(flatten)]
        criteria: CriteriaArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the full record of one product")]
    Show {
        id: u64,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "List the categories present in the catalog")]
    Categories {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Manage favorite products")]
    Fav {
        #[command(subcommand)]
        command: FavCommand,
    },

    #[command(about = "Show or change the color theme")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    #[command(about = "Render the filtered catalog as a static HTML page")]
    Export {
        #[arg(long, short = 'o', help = "Output file (stdout when omitted)")]
        output: Option<PathBuf>,

        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    #[command(about = "Browse the catalog interactively")]
    Browse,
}

#[derive(Subcommand)]
pub enum FavCommand {
    #[command(about = "Add or remove a product from favorites")]
    Toggle {
        id: u64,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "List favorite products")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Print the current theme")]
    Show,

    #[command(about = "Switch between light and dark")]
    Toggle,

    #[command(about = "Set the theme explicitly")]
    Set { theme: ThemeArg },
}
