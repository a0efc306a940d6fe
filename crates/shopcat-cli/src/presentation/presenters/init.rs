use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigStatus, InitResultViewModel, StatusBadge, StatusLevel,
};
use shopcat_runtime::Config;
use std::path::Path;

pub fn present_init_result(
    data_dir: &Path,
    config_path: &Path,
    config_status: ConfigStatus,
    config: &Config,
) -> CommandResultViewModel<InitResultViewModel> {
    let fallback_path = config.resolved_fallback_path(data_dir);
    let fallback_exists = fallback_path.exists();

    let badge = match config_status {
        ConfigStatus::Created => StatusBadge::new(StatusLevel::Success, "Configuration created"),
        ConfigStatus::Overwritten => {
            StatusBadge::new(StatusLevel::Success, "Configuration reset to defaults")
        }
        ConfigStatus::Kept => StatusBadge::new(StatusLevel::Info, "Configuration already exists"),
    };

    let mut result = CommandResultViewModel::new(InitResultViewModel {
        data_dir: data_dir.display().to_string(),
        config_path: config_path.display().to_string(),
        config_status,
        api_url: config.api_url.clone(),
        fallback_path: fallback_path.display().to_string(),
        fallback_exists,
    })
    .with_badge(badge);

    if config_status == ConfigStatus::Kept {
        result = result.with_tip("Reset it to defaults", format!("{} --force", cmd::INIT));
    }

    result
        .with_tip("List the catalog", cmd::LIST)
        .with_tip("Browse interactively", cmd::BROWSE)
}
