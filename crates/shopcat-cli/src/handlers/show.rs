use super::{HandlerContext, ensure_loaded};
use crate::presentation::presenters;
use anyhow::{Result, bail};
use shopcat_types::ProductId;

pub fn handle(hctx: &HandlerContext, id: u64) -> Result<()> {
    let state = hctx.loaded_session(None)?;
    ensure_loaded(&state)?;

    let id = ProductId::new(id);
    let Some(product) = state.catalog().and_then(|catalog| catalog.get(id)) else {
        bail!("Product {} not found", id);
    };

    hctx.render(presenters::present_product_detail(
        product,
        state.is_favorite(id),
        hctx.currency()?,
    ))
}
