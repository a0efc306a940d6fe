use crate::args::{CriteriaArgs, OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use anyhow::{Result, anyhow};
use serde::Serialize;
use shopcat_runtime::{BrowserState, FileStore};

use super::apply_criteria;

/// Browser state backed by the data directory
pub type Session = BrowserState<FileStore>;

/// What a one-shot command works with: the data directory and sources from
/// `ExecutionContext`, plus the console output chosen on the command line.
pub struct HandlerContext<'a> {
    exec: &'a ExecutionContext,
    console: ConsoleRenderer,
}

impl<'a> HandlerContext<'a> {
    pub fn new(exec: &'a ExecutionContext, format: OutputFormat, view_mode: &ViewModeArgs) -> Self {
        Self {
            exec,
            console: ConsoleRenderer::new(format, view_mode.resolve()),
        }
    }

    pub fn exec(&self) -> &'a ExecutionContext {
        self.exec
    }

    /// Symbol printed in front of prices
    pub fn currency(&self) -> Result<&'a str> {
        Ok(self.exec.config()?.currency.as_str())
    }

    /// Persisted favorites and theme, without touching the product sources
    pub fn session(&self) -> Session {
        self.exec.browser_state()
    }

    /// Load the catalog, then apply the command-line filters if any.
    ///
    /// A `LoadError` is not an error here: it stays in the session so the
    /// presenter can show it.
    pub fn loaded_session(&self, criteria: Option<&CriteriaArgs>) -> Result<Session> {
        let mut state = self.exec.browser_state();
        self.exec.load_into(&mut state)?;
        if let Some(criteria) = criteria {
            apply_criteria(&mut state, criteria);
        }
        Ok(state)
    }

    /// Print `result`; one marked as failing then fails the command
    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        self.console.render(&result)?;
        match result.failure {
            Some(reason) => Err(anyhow!(reason)),
            None => Ok(()),
        }
    }
}
