use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use shopcat_types::ProductId;

/// Flip one id without touching the network; the catalog is not needed to
/// remember a preference.
pub fn handle_toggle(hctx: &HandlerContext, id: u64) -> Result<()> {
    let mut state = hctx.session();
    let id = ProductId::new(id);

    let favorite = state
        .toggle_favorite(id)
        .context("failed to save favorites")?;

    hctx.render(presenters::present_favorite_toggle(
        id,
        favorite,
        state.favorites().len(),
    ))
}

pub fn handle_list(hctx: &HandlerContext) -> Result<()> {
    let state = hctx.session();
    hctx.render(presenters::present_favorite_list(state.favorites().ids()))
}
