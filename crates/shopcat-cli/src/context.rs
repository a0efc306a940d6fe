use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use shopcat_runtime::{BrowserState, Config, DefaultLoader, FileStore, LoadState};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values given on the command line that take precedence over config.toml
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub api_url: Option<String>,
    pub fallback: Option<PathBuf>,
}

impl SourceOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(path) = &self.fallback {
            config.fallback_path = Some(path.clone());
        }
    }
}

pub struct ExecutionContext {
    data_dir: PathBuf,
    overrides: SourceOverrides,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, overrides: SourceOverrides) -> Self {
        Self {
            data_dir,
            overrides,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn overrides(&self) -> &SourceOverrides {
        &self.overrides
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// config.toml with command-line overrides applied
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.config_path();
            let mut config = Config::load_from(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            self.overrides.apply(&mut config);
            Ok(config)
        })
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(shopcat_core::storage_dir(&self.data_dir))
    }

    /// Fresh session state with the persisted favorites and theme
    pub fn browser_state(&self) -> BrowserState<FileStore> {
        BrowserState::new(self.store())
    }

    pub fn loader(&self) -> Result<DefaultLoader> {
        let config = self.config()?;
        DefaultLoader::from_config(config, &self.data_dir).context("failed to set up product sources")
    }

    /// Run one load to completion on a current-thread runtime.
    ///
    /// The outcome, success or `LoadError`, ends up in `state`; the returned
    /// error only covers setting the load up.
    pub fn load_into(&self, state: &mut BrowserState<FileStore>) -> Result<()> {
        let loader = self.loader()?;
        let Some(ticket) = state.begin_load() else {
            return Ok(());
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let result = runtime.block_on(loader.load());
        state.finish_load(ticket, result);

        debug!(
            loaded = matches!(state.load_state(), LoadState::Loaded(_)),
            "load finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults_without_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), SourceOverrides::default());

        let config = ctx.config()?;
        assert_eq!(config.api_url, shopcat_providers::DEFAULT_API_URL);
        Ok(())
    }

    #[test]
    fn test_overrides_win_over_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join("config.toml"),
            "api_url = \"http://from-file.invalid/products\"\ncurrency = \"$\"\n",
        )?;

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            SourceOverrides {
                api_url: Some("http://from-flag.invalid/products".to_string()),
                fallback: Some(PathBuf::from("/tmp/snapshot.json")),
            },
        );

        let config = ctx.config()?;
        assert_eq!(config.api_url, "http://from-flag.invalid/products");
        assert_eq!(config.fallback_path, Some(PathBuf::from("/tmp/snapshot.json")));
        assert_eq!(config.currency, "$");
        Ok(())
    }

    #[test]
    fn test_load_into_reads_fallback() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let snapshot = temp_dir.path().join("snapshot.json");
        fs::write(
            &snapshot,
            r#"[{"id":1,"title":"Red Shoe","price":10,"category":"shoes"}]"#,
        )?;

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            SourceOverrides {
                api_url: Some("http://127.0.0.1:9/products".to_string()),
                fallback: Some(snapshot),
            },
        );

        let mut state = ctx.browser_state();
        ctx.load_into(&mut state)?;

        let catalog = state.catalog().expect("catalog should be loaded");
        assert_eq!(catalog.len(), 1);
        Ok(())
    }
}
