pub mod cmd {
    pub const INIT: &str = "shopcat init";
    pub const LIST: &str = "shopcat list";
    pub const LIST_FAVORITES: &str = "shopcat list --favorites";
    pub const CATEGORIES: &str = "shopcat categories";
    pub const BROWSE: &str = "shopcat browse";
    pub const THEME_TOGGLE: &str = "shopcat theme toggle";
}

pub mod fmt {
    pub fn show(id: u64) -> String {
        format!("shopcat show {}", id)
    }

    pub fn fav_toggle(id: u64) -> String {
        format!("shopcat fav toggle {}", id)
    }

    pub fn list_category(category: &str) -> String {
        if category.contains(char::is_whitespace) || category.contains('\'') {
            format!("shopcat list --category \"{}\"", category)
        } else {
            format!("shopcat list --category {}", category)
        }
    }
}
