use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteToggleViewModel {
    pub id: u64,
    /// Membership after the toggle
    pub favorite: bool,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteListViewModel {
    pub ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeViewModel {
    pub theme: String,
    pub changed: bool,
}
