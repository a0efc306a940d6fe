use crate::Result;
use crate::storage::KeyValueStore;
use shopcat_types::Theme;
use tracing::debug;

pub const THEME_KEY: &str = "theme";

/// Persisted light/dark preference
#[derive(Debug, Clone)]
pub struct ThemePreference<S: KeyValueStore> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Missing or unrecognized values fall back to [`Theme::default`]
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err| {
                debug!(error = %err, "theme entry is corrupt, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                debug!(error = %err, "theme entry unreadable, using default");
                Theme::default()
            }
        };

        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_when_missing() {
        let pref = ThemePreference::load(MemoryStore::new());
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn test_corrupt_falls_back_to_default() {
        let store = MemoryStore::with_entries([(THEME_KEY, "neon")]);
        let pref = ThemePreference::load(store);
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() -> Result<()> {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(store.clone());

        assert_eq!(pref.toggle()?, Theme::Dark);
        assert_eq!(store.get(THEME_KEY)?.as_deref(), Some("dark"));

        let reloaded = ThemePreference::load(store);
        assert_eq!(reloaded.theme(), Theme::Dark);
        Ok(())
    }

    #[test]
    fn test_failed_write_keeps_theme() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let mut pref = ThemePreference::load(store.clone());
        store.set_read_only(true);

        assert!(pref.set(Theme::Light).is_err());
        assert_eq!(pref.theme(), Theme::Dark);
    }
}
