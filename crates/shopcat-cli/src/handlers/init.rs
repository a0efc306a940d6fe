use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ConfigStatus;
use anyhow::{Context, Result};
use shopcat_runtime::Config;

pub fn handle(hctx: &HandlerContext, force: bool) -> Result<()> {
    let ctx = hctx.exec();
    let config_path = ctx.config_path();

    let status = match (config_path.exists(), force) {
        (false, _) => ConfigStatus::Created,
        (true, true) => ConfigStatus::Overwritten,
        (true, false) => ConfigStatus::Kept,
    };

    let config = if status == ConfigStatus::Kept {
        ctx.config()?.clone()
    } else {
        let mut config = Config::default();
        ctx.overrides().apply(&mut config);
        config
            .save_to(&config_path)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        config
    };

    hctx.render(presenters::present_init_result(
        ctx.data_dir(),
        &config_path,
        status,
        &config,
    ))
}
