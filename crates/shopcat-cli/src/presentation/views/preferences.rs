use std::fmt;

use super::FAVORITE_MARK;
use crate::presentation::view_models::{
    CreateView, FavoriteListViewModel, FavoriteToggleViewModel, ThemeViewModel, ViewMode,
};

impl CreateView for FavoriteToggleViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoriteToggleView { data: self, mode })
    }
}

struct FavoriteToggleView<'a> {
    data: &'a FavoriteToggleViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for FavoriteToggleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.favorite);
        }
        writeln!(f, "{} favorite(s) saved", self.data.total)
    }
}

impl CreateView for FavoriteListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoriteListView { data: self, mode })
    }
}

struct FavoriteListView<'a> {
    data: &'a FavoriteListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for FavoriteListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for id in &self.data.ids {
                    writeln!(f, "{}", id)?;
                }
                Ok(())
            }
            _ if self.data.ids.is_empty() => writeln!(f, "No favorites yet"),
            _ => {
                for id in &self.data.ids {
                    writeln!(f, "{} {}", FAVORITE_MARK, id)?;
                }
                Ok(())
            }
        }
    }
}

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ThemeView { data: self })
    }
}

struct ThemeView<'a> {
    data: &'a ThemeViewModel,
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.theme)
    }
}
