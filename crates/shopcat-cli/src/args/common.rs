use super::enums::SortArg;
use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all fields)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Filter and sort flags shared by `list` and `export`
#[derive(Debug, Clone, Args)]
pub struct CriteriaArgs {
    #[arg(long, short = 'q', help = "Case-insensitive substring of the title")]
    pub query: Option<String>,

    #[arg(long, short = 'c', default_value = "all", help = "Exact category, or 'all'")]
    pub category: String,

    #[arg(long, help = "Inclusive price ceiling (default: highest price, rounded up)")]
    pub max_price: Option<f64>,

    #[arg(long, value_enum, default_value = "default")]
    pub sort: SortArg,

    #[arg(long, help = "Only show favorites")]
    pub favorites: bool,
}
