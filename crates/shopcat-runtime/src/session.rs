//! Explicit application state for one browsing session.
//!
//! Everything the browser knows lives in [`BrowserState`]: the load state,
//! the current criteria, the favorites and the theme. Front ends read from it
//! and call its operations; there are no globals.

use crate::Result;
use crate::favorites::FavoritesStore;
use crate::loader::{LoadError, LoadedCatalog};
use crate::preferences::ThemePreference;
use crate::storage::KeyValueStore;
use shopcat_engine::Catalog;
use shopcat_types::{CategoryFilter, Criteria, Product, ProductId, SortMode, Theme};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded(LoadedCatalog),
    Failed(Arc<LoadError>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Handed out by [`BrowserState::begin_load`]; the matching
/// [`BrowserState::finish_load`] must present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What the grid should show right now
#[derive(Debug)]
pub enum Visible<'a> {
    NotLoaded,
    Loading,
    Failed(&'a LoadError),
    /// May be empty: that is "no matches", not a failure
    Products(Vec<&'a Product>),
}

#[derive(Debug)]
pub struct BrowserState<S: KeyValueStore> {
    load: LoadState,
    in_flight: Option<LoadTicket>,
    next_ticket: u64,
    criteria: Criteria,
    favorites: FavoritesStore<S>,
    theme: ThemePreference<S>,
}

impl<S: KeyValueStore> BrowserState<S> {
    /// Fresh state with preferences read from `store`
    pub fn new(store: S) -> Self {
        Self {
            load: LoadState::NotLoaded,
            in_flight: None,
            next_ticket: 0,
            criteria: Criteria::new(0.0),
            favorites: FavoritesStore::load(store.clone()),
            theme: ThemePreference::load(store),
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn loaded(&self) -> Option<&LoadedCatalog> {
        match &self.load {
            LoadState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.loaded().map(|l| &l.catalog)
    }

    /// Start a load unless one is already in flight.
    ///
    /// Returns `None` when a load is pending; the request is ignored rather
    /// than queued or restarted.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.in_flight.is_some() {
            debug!("load already in flight, ignoring request");
            return None;
        }

        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.load = LoadState::Loading;
        Some(ticket)
    }

    /// Store the outcome of the load started with `ticket`.
    ///
    /// Returns `false` and changes nothing for a ticket that is not the one
    /// in flight.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<LoadedCatalog, LoadError>,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            debug!(?ticket, "discarding result of a stale load");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(loaded) => {
                self.criteria.max_price = loaded.catalog.price_ceiling();
                if let CategoryFilter::Exact(name) = &self.criteria.category
                    && !loaded.catalog.categories().contains(&name.as_str())
                {
                    self.criteria.category = CategoryFilter::All;
                }
                self.load = LoadState::Loaded(loaded);
            }
            Err(err) => {
                self.load = LoadState::Failed(Arc::new(err));
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Criteria
    // ------------------------------------------------------------------

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn price_ceiling(&self) -> f64 {
        self.catalog().map_or(0.0, Catalog::price_ceiling)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.criteria.category = category.into();
    }

    /// Step through `all` followed by the catalog's categories
    pub fn cycle_category(&mut self) {
        let Some(catalog) = self.catalog() else {
            return;
        };
        let categories = catalog.categories();

        let next = match &self.criteria.category {
            CategoryFilter::All => categories.first().map(|c| c.to_string()),
            CategoryFilter::Exact(current) => categories
                .iter()
                .position(|c| *c == current.as_str())
                .and_then(|i| categories.get(i + 1))
                .map(|c| c.to_string()),
        };

        self.criteria.category = match next {
            Some(name) => CategoryFilter::Exact(name),
            None => CategoryFilter::All,
        };
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.criteria.sort = sort;
    }

    pub fn cycle_sort(&mut self) {
        self.criteria.sort = self.criteria.sort.next();
    }

    /// Clamped to `0..=price_ceiling` once a catalog is loaded
    pub fn set_max_price(&mut self, max_price: f64) {
        let max_price = max_price.max(0.0);
        self.criteria.max_price = match self.catalog() {
            Some(catalog) => max_price.min(catalog.price_ceiling()),
            None => max_price,
        };
    }

    pub fn adjust_max_price(&mut self, delta: f64) {
        self.set_max_price(self.criteria.max_price + delta);
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.criteria.favorites_only = favorites_only;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.criteria.favorites_only = !self.criteria.favorites_only;
    }

    /// Clear the query, show all categories, default sort, favorites off and
    /// the price ceiling back at its maximum
    pub fn reset_criteria(&mut self) {
        self.criteria = Criteria::new(self.price_ceiling());
    }

    pub fn visible(&self) -> Visible<'_> {
        match &self.load {
            LoadState::NotLoaded => Visible::NotLoaded,
            LoadState::Loading => Visible::Loading,
            LoadState::Failed(err) => Visible::Failed(err.as_ref()),
            LoadState::Loaded(loaded) => Visible::Products(shopcat_engine::visible(
                &loaded.catalog,
                self.favorites.ids(),
                &self.criteria,
            )),
        }
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<bool> {
        self.favorites.toggle(id)
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme.set(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme.toggle()
    }
}
