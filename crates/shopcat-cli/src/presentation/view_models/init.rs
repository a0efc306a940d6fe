use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
    Created,
    Overwritten,
    /// Already present and `--force` not given
    Kept,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_status: ConfigStatus,
    pub api_url: String,
    pub fallback_path: String,
    pub fallback_exists: bool,
}
