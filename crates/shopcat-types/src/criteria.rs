use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep the order the filters left behind
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Default, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::PriceAsc => "Price: low to high",
            SortMode::PriceDesc => "Price: high to low",
        }
    }

    /// Next mode in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            SortMode::Default => SortMode::PriceAsc,
            SortMode::PriceAsc => SortMode::PriceDesc,
            SortMode::PriceDesc => SortMode::Default,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(SortMode::Default),
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            other => Err(Error::UnknownSortMode(other.to_string())),
        }
    }
}

/// Category selector: everything, or one exact category
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(wanted) => wanted == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Exact(name) => f.write_str(name),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(s.to_string())
        }
    }
}

/// The user's current combination of search text, category, price ceiling,
/// sort mode and favorites-only flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub query: String,
    pub category: CategoryFilter,
    /// Inclusive upper bound on price
    pub max_price: f64,
    pub sort: SortMode,
    pub favorites_only: bool,
}

impl Criteria {
    /// Criteria that exclude nothing from a catalog whose price ceiling is
    /// `max_price`.
    pub fn new(max_price: f64) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            max_price,
            sort: SortMode::Default,
            favorites_only: false,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    /// Query as matched against titles: trimmed and lowercased
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        CategoryFilter::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse_and_display() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
        assert_eq!(
            "cheapest".parse::<SortMode>(),
            Err(Error::UnknownSortMode("cheapest".to_string()))
        );
    }

    #[test]
    fn test_sort_mode_cycles() {
        assert_eq!(SortMode::Default.next(), SortMode::PriceAsc);
        assert_eq!(SortMode::PriceAsc.next(), SortMode::PriceDesc);
        assert_eq!(SortMode::PriceDesc.next(), SortMode::Default);
    }

    #[test]
    fn test_category_filter_from_str() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("jewelery"),
            CategoryFilter::Exact("jewelery".to_string())
        );
    }

    #[test]
    fn test_category_filter_exact_match_is_case_sensitive() {
        let filter = CategoryFilter::from("shoes");
        assert!(filter.matches("shoes"));
        assert!(!filter.matches("Shoes"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_normalized_query() {
        let criteria = Criteria::new(10.0).with_query("  Red SHOE ");
        assert_eq!(criteria.normalized_query(), "red shoe");
    }
}
