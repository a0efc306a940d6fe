use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingViewModel {
    /// `None` renders as `N/A`
    pub rate: Option<f64>,
    /// Zero when the record has no count
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailViewModel {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub rating: RatingViewModel,
    pub favorite: bool,
}
