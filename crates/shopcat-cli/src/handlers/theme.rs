use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use shopcat_types::Theme;

pub fn handle_show(hctx: &HandlerContext) -> Result<()> {
    let state = hctx.session();
    hctx.render(presenters::present_theme(state.theme(), false))
}

pub fn handle_toggle(hctx: &HandlerContext) -> Result<()> {
    let mut state = hctx.session();
    let theme = state.toggle_theme().context("failed to save theme")?;
    hctx.render(presenters::present_theme(theme, true))
}

pub fn handle_set(hctx: &HandlerContext, theme: Theme) -> Result<()> {
    let mut state = hctx.session();
    let changed = state.theme() != theme;
    state.set_theme(theme).context("failed to save theme")?;
    hctx.render(presenters::present_theme(theme, changed))
}
