//! Filter/sort pipeline.
//!
//! Stages run in a fixed order, each on the previous stage's output:
//!
//! 1. favorites only
//! 2. category
//! 3. title query (case-insensitive substring)
//! 4. price ceiling (inclusive)
//! 5. sort (stable)
//!
//! The function is pure: same inputs, same ordered output.

use shopcat_types::{Criteria, FavoriteSet, Product, SortMode};

pub fn apply<'a>(
    products: &'a [Product],
    favorites: &FavoriteSet,
    criteria: &Criteria,
) -> Vec<&'a Product> {
    let mut list: Vec<&Product> = products.iter().collect();

    if criteria.favorites_only {
        list.retain(|p| favorites.contains(&p.id));
    }

    if !criteria.category.is_all() {
        list.retain(|p| criteria.category.matches(&p.category));
    }

    let query = criteria.normalized_query();
    if !query.is_empty() {
        list.retain(|p| p.title.to_lowercase().contains(&query));
    }

    list.retain(|p| p.price <= criteria.max_price);

    sort(&mut list, criteria.sort);
    list
}

// `sort_by` is stable, so equal prices keep their filtered order.
fn sort(list: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}
