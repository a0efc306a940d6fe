use shopcat_types::{Criteria, Product, ProductId};
use std::sync::Arc;

/// A loaded product list.
///
/// Immutable once built: reloading produces a new `Catalog` rather than
/// patching this one. Cloning is cheap and shares the underlying records.
/// Callers supply lists with unique ids; the decoder in `shopcat-providers`
/// guarantees that for anything fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in self.products.iter() {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Highest price rounded up to a whole unit, `0` for an empty catalog.
    ///
    /// This is the default price ceiling, so no product is excluded until
    /// the user lowers it.
    pub fn price_ceiling(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.price)
            .fold(None, |max: Option<f64>, price| {
                Some(max.map_or(price, |m| m.max(price)))
            })
            .map_or(0.0, f64::ceil)
    }

    /// Criteria that show the whole catalog
    pub fn default_criteria(&self) -> Criteria {
        Criteria::new(self.price_ceiling())
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price,
            category: category.to_string(),
            image: String::new(),
            description: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = Catalog::new(vec![
            product(1, 1.0, "hats"),
            product(2, 1.0, "shoes"),
            product(3, 1.0, "hats"),
            product(4, 1.0, "bags"),
        ]);

        assert_eq!(catalog.categories(), vec!["hats", "shoes", "bags"]);
    }

    #[test]
    fn test_price_ceiling_rounds_up() {
        let catalog = Catalog::new(vec![product(1, 109.95, "a"), product(2, 22.3, "a")]);
        assert_eq!(catalog.price_ceiling(), 110.0);
    }

    #[test]
    fn test_price_ceiling_keeps_whole_prices() {
        let catalog = Catalog::new(vec![product(1, 10.0, "a")]);
        assert_eq!(catalog.price_ceiling(), 10.0);
    }

    #[test]
    fn test_price_ceiling_empty_catalog() {
        assert_eq!(Catalog::empty().price_ceiling(), 0.0);
        assert!(Catalog::empty().is_empty());
    }

    #[test]
    fn test_default_criteria_use_ceiling() {
        let catalog = Catalog::new(vec![product(1, 9.5, "a")]);
        let criteria = catalog.default_criteria();
        assert_eq!(criteria.max_price, 10.0);
        assert!(criteria.query.is_empty());
        assert!(!criteria.favorites_only);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![product(1, 1.0, "a"), product(2, 2.0, "b")]);
        assert_eq!(catalog.get(ProductId::new(2)).map(|p| p.price), Some(2.0));
        assert!(catalog.get(ProductId::new(9)).is_none());
    }
}
