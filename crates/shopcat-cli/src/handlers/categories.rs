use super::{HandlerContext, ensure_loaded};
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(hctx: &HandlerContext) -> Result<()> {
    let state = hctx.loaded_session(None)?;
    ensure_loaded(&state)?;

    if let Some(catalog) = state.catalog() {
        hctx.render(presenters::present_categories(catalog))?;
    }
    Ok(())
}
