use super::HandlerContext;
use crate::args::CriteriaArgs;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(hctx: &HandlerContext, criteria: &CriteriaArgs) -> Result<()> {
    let state = hctx.loaded_session(Some(criteria))?;
    hctx.render(presenters::present_product_list(&state, hctx.currency()?))
}
