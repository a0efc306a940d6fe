use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

/// Prints one-shot command results to stdout
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }

    pub fn render<T>(&self, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        // Ids only: nothing but content, so the output pipes cleanly
        if self.mode == ViewMode::Minimal {
            print!("{}", result.content.create_view(self.mode));
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if !result.tips.is_empty() {
            println!("\n{}", "💡 Tips:".yellow().bold());
            for tip in &result.tips {
                println!("  • {}: {}", tip.description, tip.command.cyan());
            }
        }

        Ok(())
    }
}
