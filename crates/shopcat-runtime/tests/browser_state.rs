mod common;

use common::{FailingSource, StaticSource, product, shoe_and_hat};
use shopcat_runtime::{
    BrowserState, CatalogLoader, KeyValueStore, LoadState, MemoryStore, Visible,
};
use shopcat_types::{CategoryFilter, ProductId, SortMode, Theme};

fn ids(visible: &Visible<'_>) -> Vec<u64> {
    match visible {
        Visible::Products(items) => items.iter().map(|p| p.id.get()).collect(),
        other => panic!("expected products, got {:?}", other),
    }
}

async fn loaded_state(products: Vec<shopcat_types::Product>) -> BrowserState<MemoryStore> {
    let mut state = BrowserState::new(MemoryStore::new());
    let ticket = state.begin_load().unwrap();
    let loader = CatalogLoader::new(StaticSource::new(products), StaticSource::new(vec![]));
    state.finish_load(ticket, loader.load().await);
    state
}

#[test]
fn test_not_loaded_is_distinct_from_empty() {
    let state = BrowserState::new(MemoryStore::new());
    assert!(matches!(state.visible(), Visible::NotLoaded));
}

#[tokio::test]
async fn test_loaded_empty_catalog_shows_empty_products() {
    let state = loaded_state(vec![]).await;
    match state.visible() {
        Visible::Products(items) => assert!(items.is_empty()),
        other => panic!("expected empty products, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_failure_reaches_failed_state() {
    let mut state = BrowserState::new(MemoryStore::new());
    let ticket = state.begin_load().unwrap();
    let loader = CatalogLoader::new(
        FailingSource::new("http://api.invalid/products"),
        FailingSource::new("/missing.json"),
    );

    assert!(state.finish_load(ticket, loader.load().await));

    assert!(matches!(state.load_state(), LoadState::Failed(_)));
    assert!(matches!(state.visible(), Visible::Failed(_)));
    assert!(state.catalog().is_none());
}

#[tokio::test]
async fn test_second_load_ignored_while_in_flight() {
    let mut state = BrowserState::new(MemoryStore::new());
    let first = state.begin_load().unwrap();

    assert!(state.begin_load().is_none());
    assert!(state.load_state().is_loading());

    let loader = CatalogLoader::new(StaticSource::new(shoe_and_hat()), StaticSource::new(vec![]));
    assert!(state.finish_load(first, loader.load().await));

    // A retry is accepted once the first load has settled.
    assert!(state.begin_load().is_some());
}

#[tokio::test]
async fn test_stale_ticket_is_discarded() {
    let mut state = BrowserState::new(MemoryStore::new());
    let first = state.begin_load().unwrap();
    let loader = CatalogLoader::new(StaticSource::new(shoe_and_hat()), StaticSource::new(vec![]));
    state.finish_load(first, loader.load().await);

    let second = state.begin_load().unwrap();
    assert!(!state.finish_load(first, loader.load().await));
    assert!(state.load_state().is_loading());
    assert!(state.finish_load(second, loader.load().await));
}

#[tokio::test]
async fn test_max_price_defaults_to_ceiling() {
    let state = loaded_state(vec![
        product(1, "a", 9.99, "x"),
        product(2, "b", 109.95, "x"),
    ])
    .await;

    assert_eq!(state.criteria().max_price, 110.0);
    assert_eq!(ids(&state.visible()), vec![1, 2]);
}

#[tokio::test]
async fn test_query_and_sort_examples() {
    let mut state = loaded_state(shoe_and_hat()).await;

    state.set_query("sh");
    assert_eq!(ids(&state.visible()), vec![1]);

    state.set_query("");
    state.set_sort(SortMode::PriceAsc);
    assert_eq!(ids(&state.visible()), vec![2, 1]);
}

#[tokio::test]
async fn test_favorites_only_follows_toggles() {
    let mut state = loaded_state(shoe_and_hat()).await;
    state.set_favorites_only(true);
    assert_eq!(ids(&state.visible()), Vec::<u64>::new());

    assert!(state.toggle_favorite(ProductId::new(2)).unwrap());
    assert_eq!(ids(&state.visible()), vec![2]);

    assert!(!state.toggle_favorite(ProductId::new(2)).unwrap());
    assert_eq!(ids(&state.visible()), Vec::<u64>::new());
}

#[tokio::test]
async fn test_cycle_category_wraps_to_all() {
    let mut state = loaded_state(shoe_and_hat()).await;

    state.cycle_category();
    assert_eq!(state.criteria().category, CategoryFilter::from("shoes"));
    state.cycle_category();
    assert_eq!(state.criteria().category, CategoryFilter::from("hats"));
    state.cycle_category();
    assert_eq!(state.criteria().category, CategoryFilter::All);
}

#[tokio::test]
async fn test_max_price_is_clamped() {
    let mut state = loaded_state(shoe_and_hat()).await;

    state.adjust_max_price(50.0);
    assert_eq!(state.criteria().max_price, 10.0);

    state.set_max_price(-3.0);
    assert_eq!(state.criteria().max_price, 0.0);
    assert_eq!(ids(&state.visible()), Vec::<u64>::new());
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let mut state = loaded_state(shoe_and_hat()).await;
    state.set_query("hat");
    state.set_category("hats");
    state.set_sort(SortMode::PriceDesc);
    state.set_max_price(1.0);
    state.set_favorites_only(true);

    state.reset_criteria();

    let criteria = state.criteria();
    assert!(criteria.query.is_empty());
    assert_eq!(criteria.category, CategoryFilter::All);
    assert_eq!(criteria.sort, SortMode::Default);
    assert_eq!(criteria.max_price, 10.0);
    assert!(!criteria.favorites_only);
    assert_eq!(ids(&state.visible()), vec![1, 2]);
}

#[test]
fn test_preferences_survive_new_state() {
    let store = MemoryStore::new();
    {
        let mut state = BrowserState::new(store.clone());
        state.toggle_favorite(ProductId::new(4)).unwrap();
        assert_eq!(state.toggle_theme().unwrap(), Theme::Dark);
    }

    let state = BrowserState::new(store.clone());
    assert!(state.is_favorite(ProductId::new(4)));
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_corrupt_preferences_degrade_to_defaults() {
    let store = MemoryStore::with_entries([("favorites", "{oops"), ("theme", "purple")]);
    let state = BrowserState::new(store);

    assert!(state.favorites().is_empty());
    assert_eq!(state.theme(), Theme::Light);
}
