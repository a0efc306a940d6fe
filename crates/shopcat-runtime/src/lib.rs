//! Runtime layer for shopcat.
//!
//! Owns everything with a lifetime longer than one pipeline run:
//! configuration, persisted preferences, catalog loading with fallback and
//! the per-session [`BrowserState`].

pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod loader;
pub mod preferences;
pub mod session;
pub mod storage;

pub use config::Config;
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use favorites::FavoritesStore;
pub use loader::{CatalogLoader, DefaultLoader, LoadError, LoadOrigin, LoadedCatalog, NetworkError};
pub use preferences::ThemePreference;
pub use session::{BrowserState, LoadState, LoadTicket, Visible};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
