use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, FavoriteListViewModel, FavoriteToggleViewModel, StatusBadge,
    ThemeViewModel,
};
use shopcat_types::{FavoriteSet, ProductId, Theme};

pub fn present_favorite_toggle(
    id: ProductId,
    favorite: bool,
    total: usize,
) -> CommandResultViewModel<FavoriteToggleViewModel> {
    CommandResultViewModel::new(FavoriteToggleViewModel {
        id: id.get(),
        favorite,
        total,
    })
    .with_badge(StatusBadge::favorite_changed(id, favorite))
    .with_tip("List your favorites", cmd::LIST_FAVORITES)
}

pub fn present_favorite_list(
    favorites: &FavoriteSet,
) -> CommandResultViewModel<FavoriteListViewModel> {
    let ids: Vec<u64> = favorites.iter().map(|id| id.get()).collect();
    let mut result = CommandResultViewModel::new(FavoriteListViewModel { ids });

    result = if favorites.is_empty() {
        result.with_tip("Find something to mark", cmd::LIST)
    } else {
        result.with_tip("Show favorites with titles and prices", cmd::LIST_FAVORITES)
    };

    result
}

pub fn present_theme(theme: Theme, changed: bool) -> CommandResultViewModel<ThemeViewModel> {
    let mut result = CommandResultViewModel::new(ThemeViewModel {
        theme: theme.as_str().to_string(),
        changed,
    });

    if changed {
        result = result.with_badge(StatusBadge::theme_changed(theme));
    } else {
        result = result.with_tip("Switch light/dark", cmd::THEME_TOGGLE);
    }

    result
}
