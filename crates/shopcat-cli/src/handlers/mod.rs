mod context;

pub mod browse;
pub mod categories;
pub mod export;
pub mod favorites;
pub mod init;
pub mod list;
pub mod show;
pub mod theme;

pub use context::HandlerContext;

use crate::args::CriteriaArgs;
use anyhow::{Result, anyhow};
use shopcat_runtime::{BrowserState, KeyValueStore, LoadState};

/// Copy command-line filters into the session criteria.
///
/// Runs after the load, so an absent `--max-price` keeps the catalog's
/// price ceiling and a given one is clamped to it.
pub(crate) fn apply_criteria<S: KeyValueStore>(state: &mut BrowserState<S>, args: &CriteriaArgs) {
    if let Some(query) = &args.query {
        state.set_query(query.as_str());
    }
    state.set_category(args.category.as_str());
    if let Some(max_price) = args.max_price {
        state.set_max_price(max_price);
    }
    state.set_sort(args.sort.into());
    state.set_favorites_only(args.favorites);
}

/// Turn a failed load into the command's error, after the caller has shown
/// the failure to the user.
pub(crate) fn ensure_loaded<S: KeyValueStore>(state: &BrowserState<S>) -> Result<()> {
    match state.load_state() {
        LoadState::Loaded(_) => Ok(()),
        LoadState::Failed(err) => Err(anyhow!("{}", err)),
        LoadState::NotLoaded | LoadState::Loading => Err(anyhow!("products were not loaded")),
    }
}
