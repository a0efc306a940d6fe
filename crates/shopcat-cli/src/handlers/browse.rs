use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiRenderer;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `shopcat list` for piped output");
    }

    let config = ctx.config()?;
    let renderer = TuiRenderer::new(ctx.loader()?, config.currency.clone(), config.debounce())?;
    renderer.run(ctx.browser_state())
}
