use super::args::{Cli, Commands, FavCommand, ThemeCommand, ViewModeArgs, hints::cmd};
use super::context::{ExecutionContext, SourceOverrides};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogTarget};
use anyhow::Result;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = shopcat_core::resolve_data_dir(cli.data_dir.as_deref())?;

    // The browser owns the screen, so its logs go to a file
    let log_path = shopcat_core::log_file_path(&data_dir);
    let log_target = match cli.command {
        Some(Commands::Browse) => LogTarget::File(&log_path),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, log_target)?;

    let overrides = SourceOverrides {
        api_url: cli.api_url,
        fallback: cli.fallback.as_deref().map(shopcat_core::expand_tilde),
    };
    let ctx = ExecutionContext::new(data_dir, overrides);

    let Some(command) = cli.command else {
        show_guidance(ctx.data_dir());
        return Ok(());
    };

    let format = cli.format;
    let default_view = ViewModeArgs::default();

    match command {
        Commands::Init { force } => {
            let hctx = HandlerContext::new(&ctx, format, &default_view);
            handlers::init::handle(&hctx, force)
        }

        Commands::List {
            criteria,
            view_mode,
        } => {
            let hctx = HandlerContext::new(&ctx, format, &view_mode);
            handlers::list::handle(&hctx, &criteria)
        }

        Commands::Show { id, view_mode } => {
            let hctx = HandlerContext::new(&ctx, format, &view_mode);
            handlers::show::handle(&hctx, id)
        }

        Commands::Categories { view_mode } => {
            let hctx = HandlerContext::new(&ctx, format, &view_mode);
            handlers::categories::handle(&hctx)
        }

        Commands::Fav { command } => match command {
            FavCommand::Toggle { id, view_mode } => {
                let hctx = HandlerContext::new(&ctx, format, &view_mode);
                handlers::favorites::handle_toggle(&hctx, id)
            }
            FavCommand::List { view_mode } => {
                let hctx = HandlerContext::new(&ctx, format, &view_mode);
                handlers::favorites::handle_list(&hctx)
            }
        },

        Commands::Theme { command } => {
            let hctx = HandlerContext::new(&ctx, format, &default_view);
            match command {
                ThemeCommand::Show => handlers::theme::handle_show(&hctx),
                ThemeCommand::Toggle => handlers::theme::handle_toggle(&hctx),
                ThemeCommand::Set { theme } => handlers::theme::handle_set(&hctx, theme.into()),
            }
        }

        Commands::Export { output, criteria } => {
            let hctx = HandlerContext::new(&ctx, format, &default_view);
            handlers::export::handle(&hctx, output.as_deref(), &criteria)
        }

        Commands::Browse => handlers::browse::handle(&ctx),
    }
}

fn show_guidance(data_dir: &Path) {
    println!("shopcat - browse a product catalog from the terminal\n");

    let config_exists = shopcat_runtime::Config::path_in(data_dir).exists();
    if !config_exists {
        println!("Get started:");
        println!("  {}\n", cmd::INIT);
    }

    println!("Quick commands:");
    println!("  {:<34} # Every product", cmd::LIST);
    println!("  {:<34} # Products you marked", cmd::LIST_FAVORITES);
    println!("  {:<34} # Categories in the catalog", cmd::CATEGORIES);
    println!("  {:<34} # Search, filter and sort interactively", cmd::BROWSE);
    println!("  {:<34} # Switch light/dark", cmd::THEME_TOGGLE);
    println!();
    println!("For more commands:");
    println!("  shopcat --help");
}
