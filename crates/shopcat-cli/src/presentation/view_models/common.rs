use serde::Serialize;
use shopcat_types::{ProductId, Theme};

use crate::presentation::formatters::status::LOAD_FAILED;

/// Density of text output. JSON output ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Ids only, for pipes
    Minimal,
    /// One line per product
    Compact,
    /// Cards
    #[default]
    Standard,
    /// Cards plus image URLs, the active filters and the catalog source
    Verbose,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

/// Headline printed above a command's content
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    /// Neither the API nor the fallback snapshot produced a catalog
    pub fn load_failed() -> Self {
        Self::new(StatusLevel::Error, LOAD_FAILED)
    }

    /// The catalog on screen came from the snapshot at `location`
    pub fn from_fallback(location: &str) -> Self {
        Self::new(
            StatusLevel::Warning,
            format!(
                "Product API unavailable, showing the fallback snapshot ({})",
                location
            ),
        )
    }

    pub fn favorite_changed(id: ProductId, favorite: bool) -> Self {
        if favorite {
            Self::new(StatusLevel::Success, format!("Added product {} to favorites", id))
        } else {
            Self::new(StatusLevel::Info, format!("Removed product {} from favorites", id))
        }
    }

    pub fn theme_changed(theme: Theme) -> Self {
        Self::new(StatusLevel::Success, format!("Theme set to {}", theme))
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

/// A shopcat command worth running next
#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub description: String,
    pub command: String,
}

impl Tip {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}
