use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CategoryEntryViewModel, CategoryListViewModel, CommandResultViewModel, ExportResultViewModel,
    FilterSummary, LoadStatusViewModel, ProductCardViewModel, ProductListViewModel,
    SourceViewModel, StatusBadge, StatusLevel,
};
use shopcat_engine::Catalog;
use shopcat_runtime::{BrowserState, KeyValueStore, LoadOrigin, Visible};
use shopcat_types::{Criteria, Product};
use std::path::Path;

fn card(product: &Product, favorite: bool) -> ProductCardViewModel {
    ProductCardViewModel {
        id: product.id.get(),
        title: product.title.clone(),
        price: product.price,
        category: product.category.clone(),
        image: product.image.clone(),
        favorite,
    }
}

fn filter_summary(criteria: &Criteria, price_ceiling: f64) -> FilterSummary {
    FilterSummary {
        query: criteria.query.clone(),
        category: criteria.category.to_string(),
        max_price: criteria.max_price,
        price_ceiling,
        sort: criteria.sort.as_str().to_string(),
        favorites_only: criteria.favorites_only,
    }
}

/// Snapshot of the grid for the current state.
///
/// `just_loaded` selects the post-load status wording ("Loaded N products")
/// over the post-filter one ("N products displayed").
pub fn build_product_list<S: KeyValueStore>(
    state: &BrowserState<S>,
    currency: &str,
    just_loaded: bool,
) -> ProductListViewModel {
    let (status, products) = match state.visible() {
        Visible::NotLoaded => (LoadStatusViewModel::NotLoaded, Vec::new()),
        Visible::Loading => (LoadStatusViewModel::Loading, Vec::new()),
        Visible::Failed(err) => (
            LoadStatusViewModel::Failed {
                reason: err.to_string(),
            },
            Vec::new(),
        ),
        Visible::Products(list) => {
            let cards: Vec<ProductCardViewModel> = list
                .into_iter()
                .map(|p| card(p, state.is_favorite(p.id)))
                .collect();
            let status = if just_loaded {
                LoadStatusViewModel::Loaded {
                    count: state.catalog().map_or(0, Catalog::len),
                }
            } else {
                LoadStatusViewModel::Displayed { count: cards.len() }
            };
            (status, cards)
        }
    };

    let source = state.loaded().map(|loaded| SourceViewModel {
        origin: match loaded.origin {
            LoadOrigin::Primary => "primary".to_string(),
            LoadOrigin::Fallback => "fallback".to_string(),
        },
        location: loaded.source.clone(),
    });

    ProductListViewModel {
        status,
        source,
        filters: filter_summary(state.criteria(), state.price_ceiling()),
        currency: currency.to_string(),
        total: state.catalog().map_or(0, Catalog::len),
        products,
    }
}

pub fn present_product_list<S: KeyValueStore>(
    state: &BrowserState<S>,
    currency: &str,
) -> CommandResultViewModel<ProductListViewModel> {
    let content = build_product_list(state, currency, false);
    let failure = match &content.status {
        LoadStatusViewModel::Failed { reason } => Some(reason.clone()),
        _ => None,
    };
    let fallback_location = content
        .source
        .as_ref()
        .filter(|s| s.origin == "fallback")
        .map(|s| s.location.clone());
    let first_id = content.products.first().map(|p| p.id);
    let filters_active = {
        let f = &content.filters;
        !f.query.trim().is_empty()
            || f.category != "all"
            || f.favorites_only
            || f.max_price < f.price_ceiling
    };

    let mut result = CommandResultViewModel::new(content);

    if let Some(reason) = failure {
        return result
            .with_badge(StatusBadge::load_failed())
            .with_tip("Check api_url and fallback_path in config.toml", cmd::INIT)
            .failing(reason);
    }

    if let Some(location) = fallback_location {
        result = result.with_badge(StatusBadge::from_fallback(&location));
    }

    match first_id {
        Some(id) => {
            result = result.with_tip("Show the full record of a product", fmt::show(id));
        }
        None if state.criteria().favorites_only && state.favorites().is_empty() => {
            result = result.with_tip("No favorites yet, mark one first", fmt::fav_toggle(1));
        }
        None if filters_active => {
            result = result.with_tip("Nothing matches these filters, try without them", cmd::LIST);
        }
        None => {}
    }

    result
}

pub fn present_categories(catalog: &Catalog) -> CommandResultViewModel<CategoryListViewModel> {
    let categories: Vec<CategoryEntryViewModel> = catalog
        .categories()
        .into_iter()
        .map(|name| CategoryEntryViewModel {
            name: name.to_string(),
            product_count: catalog
                .products()
                .iter()
                .filter(|p| p.category == name)
                .count(),
        })
        .collect();

    let first = categories.first().map(|c| c.name.clone());
    let mut result = CommandResultViewModel::new(CategoryListViewModel { categories });

    if let Some(name) = first {
        result = result.with_tip("List one category", fmt::list_category(&name));
    }

    result
}

pub fn present_export_result(
    path: &Path,
    count: usize,
) -> CommandResultViewModel<ExportResultViewModel> {
    CommandResultViewModel::new(ExportResultViewModel {
        path: path.display().to_string(),
        count,
    })
    .with_badge(StatusBadge::new(
        StatusLevel::Success,
        format!(
            "Exported {} product{}",
            count,
            if count == 1 { "" } else { "s" }
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcat_runtime::{LoadError, LoadedCatalog, MemoryStore};
    use shopcat_types::ProductId;

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            category: category.to_string(),
            image: String::new(),
            description: String::new(),
            rating: None,
        }
    }

    fn loaded_state(origin: LoadOrigin) -> BrowserState<MemoryStore> {
        let mut state = BrowserState::new(MemoryStore::new());
        let ticket = state.begin_load().expect("no load in flight");
        state.finish_load(
            ticket,
            Ok(LoadedCatalog {
                catalog: Catalog::new(vec![
                    product(1, "Red Shoe", 10.0, "shoes"),
                    product(2, "Blue Hat", 5.0, "hats"),
                ]),
                origin,
                source: "test".to_string(),
            }),
        );
        state
    }

    #[test]
    fn test_status_after_load_counts_catalog() {
        let mut state = loaded_state(LoadOrigin::Primary);
        state.set_query("shoe");

        let vm = build_product_list(&state, "₹", true);
        assert_eq!(vm.status, LoadStatusViewModel::Loaded { count: 2 });

        let vm = build_product_list(&state, "₹", false);
        assert_eq!(vm.status, LoadStatusViewModel::Displayed { count: 1 });
        assert_eq!(vm.products[0].id, 1);
    }

    #[test]
    fn test_not_loaded_is_distinct_from_empty() {
        let state = BrowserState::new(MemoryStore::new());
        let vm = build_product_list(&state, "₹", false);
        assert_eq!(vm.status, LoadStatusViewModel::NotLoaded);
        assert!(vm.source.is_none());
    }

    #[test]
    fn test_fallback_gets_warning_badge() {
        let state = loaded_state(LoadOrigin::Fallback);
        let result = present_product_list(&state, "₹");

        let badge = result.badge.expect("fallback should be flagged");
        assert_eq!(badge.level, StatusLevel::Warning);
        assert!(badge.label.contains("(test)"));
        assert!(result.failure.is_none());
        assert_eq!(result.content.source.map(|s| s.origin), Some("fallback".to_string()));
    }

    #[test]
    fn test_failed_load_renders_then_fails() {
        let mut state = BrowserState::new(MemoryStore::new());
        let ticket = state.begin_load().expect("no load in flight");
        state.finish_load(
            ticket,
            Err(LoadError {
                primary_source: "https://api.example/products".to_string(),
                primary: shopcat_providers::Error::Parse("not an array".to_string()),
                fallback_source: "/tmp/products.json".to_string(),
                fallback: shopcat_providers::Error::Parse("empty file".to_string()),
            }),
        );

        let result = present_product_list(&state, "₹");
        let badge = result.badge.as_ref().expect("failure should be flagged");
        assert_eq!(badge.level, StatusLevel::Error);
        assert_eq!(badge.label, "Failed to load products. Try again later.");
        assert_eq!(result.tips[0].command, cmd::INIT);

        let reason = result.failure.as_deref().expect("command should fail");
        assert!(reason.contains("/tmp/products.json"));
    }

    #[test]
    fn test_empty_favorites_suggests_marking_one() {
        let mut state = loaded_state(LoadOrigin::Primary);
        state.set_favorites_only(true);

        let result = present_product_list(&state, "₹");
        assert!(result.content.products.is_empty());
        assert_eq!(result.tips.len(), 1);
        assert_eq!(result.tips[0].command, "shopcat fav toggle 1");
    }

    #[test]
    fn test_categories_count_products() {
        let catalog = Catalog::new(vec![
            product(1, "Red Shoe", 10.0, "shoes"),
            product(2, "Blue Hat", 5.0, "hats"),
            product(3, "Green Shoe", 12.0, "shoes"),
        ]);

        let result = present_categories(&catalog);
        let names: Vec<(&str, usize)> = result
            .content
            .categories
            .iter()
            .map(|c| (c.name.as_str(), c.product_count))
            .collect();
        assert_eq!(names, vec![("shoes", 2), ("hats", 1)]);
    }
}
