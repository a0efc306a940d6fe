use serde::Serialize;

/// Load progress and pipeline outcome, as shown on the status line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatusViewModel {
    NotLoaded,
    Loading,
    /// Right after a load, before any control re-ran the pipeline
    Loaded { count: usize },
    /// After the pipeline ran against the current criteria
    Displayed { count: usize },
    Failed { reason: String },
}

impl LoadStatusViewModel {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatusViewModel::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceViewModel {
    /// `primary` or `fallback`
    pub origin: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub query: String,
    /// `all` or an exact category name
    pub category: String,
    pub max_price: f64,
    pub price_ceiling: f64,
    pub sort: String,
    pub favorites_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardViewModel {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListViewModel {
    pub status: LoadStatusViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceViewModel>,
    pub filters: FilterSummary,
    pub currency: String,
    /// Products in the catalog before filtering
    pub total: usize,
    pub products: Vec<ProductCardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntryViewModel {
    pub name: String,
    pub product_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<CategoryEntryViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportResultViewModel {
    pub path: String,
    pub count: usize,
}
