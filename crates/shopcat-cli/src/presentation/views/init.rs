use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{
    ConfigStatus, CreateView, InitResultViewModel, ViewMode,
};

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitResultView { data: self })
    }
}

struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        writeln!(f, "Data directory: {}", data.data_dir)?;
        let config_note = match data.config_status {
            ConfigStatus::Created => "written",
            ConfigStatus::Overwritten => "overwritten",
            ConfigStatus::Kept => "unchanged",
        };
        writeln!(f, "Config:         {} ({})", data.config_path, config_note)?;
        writeln!(f, "Product API:    {}", data.api_url)?;

        if data.fallback_exists {
            writeln!(f, "Fallback:       {}", data.fallback_path)?;
        } else {
            writeln!(
                f,
                "Fallback:       {} {}",
                data.fallback_path,
                "(missing: loads fail when the API is down)".yellow()
            )?;
        }
        Ok(())
    }
}
