use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopcat_runtime::{
    BrowserState, Debouncer, KeyValueStore, LoadError, LoadTicket, LoadedCatalog,
};
use shopcat_types::ProductId;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::presentation::presenters::{build_product_detail, build_product_list};
use crate::presentation::view_models::{ProductDetailViewModel, ProductListViewModel};

/// Number of slider steps between zero and the price ceiling
const PRICE_STEPS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Grid,
    Search,
}

/// Work the event loop has to do on behalf of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Reload,
    Quit,
}

pub(crate) struct AppState<S: KeyValueStore> {
    pub browser: BrowserState<S>,
    pub currency: String,
    pub debouncer: Debouncer,
    /// Grid as of the last pipeline run
    pub list: ProductListViewModel,
    pub focus: Focus,
    pub selected: usize,
    pub detail: Option<ProductDetailViewModel>,
    /// One-off message, e.g. a failed write; cleared by the next successful action
    pub notice: Option<String>,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(browser: BrowserState<S>, currency: String, debounce: Duration) -> Self {
        let list = build_product_list(&browser, &currency, false);
        Self {
            browser,
            currency,
            debouncer: Debouncer::new(debounce),
            list,
            focus: Focus::Grid,
            selected: 0,
            detail: None,
            notice: None,
        }
    }

    /// Re-run the pipeline and rebuild the grid
    pub fn refresh(&mut self, just_loaded: bool) {
        self.list = build_product_list(&self.browser, &self.currency, just_loaded);
        self.selected = self
            .selected
            .min(self.list.products.len().saturating_sub(1));
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let ticket = self.browser.begin_load()?;
        self.detail = None;
        self.refresh(false);
        Some(ticket)
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<LoadedCatalog, LoadError>) {
        if self.browser.finish_load(ticket, result) {
            self.selected = 0;
            self.refresh(true);
        }
    }

    /// Run the debounced search once input has been idle long enough
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire(now) {
            self.refresh(false);
        }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.list.products.get(self.selected).map(|p| p.id)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.detail.is_some() {
            self.handle_detail_key(key);
            return None;
        }

        match self.focus {
            Focus::Search => {
                self.handle_search_key(key, now);
                None
            }
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.detail = None,
            KeyCode::Char('f') => self.toggle_favorite(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.browser.set_query("");
                self.apply_now();
            }
            // Other chords are not text
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => {
                let mut query = self.browser.criteria().query.clone();
                query.push(c);
                self.browser.set_query(query);
                self.debouncer.input(now);
            }
            KeyCode::Backspace => {
                let mut query = self.browser.criteria().query.clone();
                if query.pop().is_some() {
                    self.browser.set_query(query);
                    self.debouncer.input(now);
                }
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down | KeyCode::Tab => {
                self.focus = Focus::Grid;
                if self.debouncer.is_pending() {
                    self.apply_now();
                }
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('R') => return Some(Action::Reload),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('f') => self.toggle_favorite(),
            KeyCode::Char('F') => {
                self.browser.toggle_favorites_only();
                self.apply_now();
            }
            KeyCode::Tab | KeyCode::Char('c') => {
                self.browser.cycle_category();
                self.apply_now();
            }
            KeyCode::Char('s') => {
                self.browser.cycle_sort();
                self.apply_now();
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                self.browser.adjust_max_price(self.price_step());
                self.apply_now();
            }
            KeyCode::Char('-') | KeyCode::Left => {
                self.browser.adjust_max_price(-self.price_step());
                self.apply_now();
            }
            KeyCode::Char('r') => {
                self.browser.reset_criteria();
                self.apply_now();
            }
            KeyCode::Char('t') => {
                if let Err(err) = self.browser.toggle_theme() {
                    warn!(error = %err, "failed to save theme");
                    self.notice = Some(format!("Could not save theme: {}", err));
                }
            }
            _ => {}
        }
        None
    }

    /// Discrete controls skip the debounce and drop any pending text run
    fn apply_now(&mut self) {
        self.debouncer.cancel();
        self.refresh(false);
    }

    fn price_step(&self) -> f64 {
        (self.browser.price_ceiling() / PRICE_STEPS).ceil().max(1.0)
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.list.products.len() {
            self.selected += 1;
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn open_detail(&mut self) {
        let Some(id) = self.selected_id().map(ProductId::new) else {
            return;
        };
        let Some(product) = self.browser.catalog().and_then(|c| c.get(id)) else {
            return;
        };
        self.detail = Some(build_product_detail(
            product,
            self.browser.is_favorite(id),
            &self.currency,
        ));
    }

    fn toggle_favorite(&mut self) {
        let id = match &self.detail {
            Some(detail) => Some(detail.id),
            None => self.selected_id(),
        };
        let Some(id) = id.map(ProductId::new) else {
            return;
        };

        match self.browser.toggle_favorite(id) {
            Ok(favorite) => {
                self.notice = None;
                if let Some(detail) = &mut self.detail {
                    detail.favorite = favorite;
                }
            }
            Err(err) => {
                warn!(error = %err, %id, "failed to save favorites");
                self.notice = Some(format!("Could not save favorites: {}", err));
            }
        }
        self.refresh(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::LoadStatusViewModel;
    use shopcat_engine::Catalog;
    use shopcat_runtime::{LoadOrigin, MemoryStore};
    use shopcat_types::{Product, SortMode};

    const DEBOUNCE: Duration = Duration::from_millis(200);

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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app(store: MemoryStore) -> AppState<MemoryStore> {
        let mut app = AppState::new(BrowserState::new(store), "₹".to_string(), DEBOUNCE);
        let ticket = app.begin_load().expect("no load in flight");
        app.finish_load(
            ticket,
            Ok(LoadedCatalog {
                catalog: Catalog::new(vec![
                    product(1, "Red Shoe", 10.0, "shoes"),
                    product(2, "Blue Hat", 5.0, "hats"),
                ]),
                origin: LoadOrigin::Primary,
                source: "test".to_string(),
            }),
        );
        app
    }

    #[test]
    fn test_load_status_progression() {
        let mut app = AppState::new(BrowserState::new(MemoryStore::new()), "₹".to_string(), DEBOUNCE);
        let ticket = app.begin_load().expect("no load in flight");
        assert_eq!(app.list.status, LoadStatusViewModel::Loading);

        assert!(app.begin_load().is_none(), "second load is ignored while in flight");

        app.finish_load(
            ticket,
            Ok(LoadedCatalog {
                catalog: Catalog::new(vec![product(1, "Red Shoe", 10.0, "shoes")]),
                origin: LoadOrigin::Primary,
                source: "test".to_string(),
            }),
        );
        assert_eq!(app.list.status, LoadStatusViewModel::Loaded { count: 1 });
    }

    #[test]
    fn test_typing_waits_for_idle() {
        let mut app = loaded_app(MemoryStore::new());
        let t0 = Instant::now();

        app.handle_key(key(KeyCode::Char('/')), t0);
        assert_eq!(app.focus, Focus::Search);

        app.handle_key(key(KeyCode::Char('h')), t0);
        app.handle_key(key(KeyCode::Char('a')), t0 + Duration::from_millis(50));
        assert_eq!(app.browser.criteria().query, "ha");
        assert_eq!(app.list.products.len(), 2, "grid unchanged before idle");

        app.tick(t0 + Duration::from_millis(100));
        assert_eq!(app.list.products.len(), 2);

        app.tick(t0 + Duration::from_millis(250));
        assert_eq!(app.list.products.len(), 1);
        assert_eq!(app.list.products[0].id, 2);
        assert_eq!(app.list.status, LoadStatusViewModel::Displayed { count: 1 });
    }

    #[test]
    fn test_search_ignores_control_and_alt_chords() {
        let mut app = loaded_app(MemoryStore::new());
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('/')), now);
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL), now);
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), now);
        assert_eq!(app.browser.criteria().query, "");
        assert!(!app.debouncer.is_pending());

        app.handle_key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT), now);
        app.handle_key(key(KeyCode::Char('e')), now);
        assert_eq!(app.browser.criteria().query, "Re");

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), now);
        assert_eq!(app.browser.criteria().query, "");
    }

    #[test]
    fn test_discrete_controls_apply_immediately() {
        let mut app = loaded_app(MemoryStore::new());
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('s')), now);
        assert_eq!(app.browser.criteria().sort, SortMode::PriceAsc);
        let ids: Vec<u64> = app.list.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);

        app.handle_key(key(KeyCode::Tab), now);
        assert_eq!(app.list.products.len(), 1);
        assert_eq!(app.list.products[0].id, 1);

        app.handle_key(key(KeyCode::Char('r')), now);
        assert_eq!(app.list.products.len(), 2);
        assert_eq!(app.browser.criteria().max_price, 10.0);
    }

    #[test]
    fn test_favorite_toggle_and_favorites_only() {
        let store = MemoryStore::new();
        let mut app = loaded_app(store.clone());
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('F')), now);
        assert!(app.list.products.is_empty());
        assert_eq!(app.list.status, LoadStatusViewModel::Displayed { count: 0 });

        app.handle_key(key(KeyCode::Char('F')), now);
        app.handle_key(key(KeyCode::Char('f')), now);
        assert!(app.list.products[0].favorite);

        app.handle_key(key(KeyCode::Char('F')), now);
        assert_eq!(app.list.products.len(), 1);
        assert_eq!(store.get("favorites").ok().flatten().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_failed_favorite_write_shows_notice() {
        let store = MemoryStore::new();
        let mut app = loaded_app(store.clone());
        store.set_read_only(true);

        app.handle_key(key(KeyCode::Char('f')), Instant::now());
        assert!(!app.list.products[0].favorite);
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_detail_opens_and_closes() {
        let mut app = loaded_app(MemoryStore::new());
        let now = Instant::now();

        app.handle_key(key(KeyCode::Down), now);
        app.handle_key(key(KeyCode::Enter), now);
        let detail = app.detail.as_ref().expect("detail should be open");
        assert_eq!(detail.id, 2);
        assert_eq!(detail.rating.rate, None);

        assert_eq!(app.handle_key(key(KeyCode::Esc), now), None);
        assert!(app.detail.is_none());
        assert_eq!(app.handle_key(key(KeyCode::Esc), now), Some(Action::Quit));
    }

    #[test]
    fn test_retry_key_requests_reload() {
        let mut app = loaded_app(MemoryStore::new());
        assert_eq!(
            app.handle_key(key(KeyCode::Char('R')), Instant::now()),
            Some(Action::Reload)
        );
    }

    #[test]
    fn test_price_slider_steps() {
        let mut app = loaded_app(MemoryStore::new());
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('-')), now);
        assert_eq!(app.browser.criteria().max_price, 9.0);
        app.handle_key(key(KeyCode::Char('+')), now);
        app.handle_key(key(KeyCode::Char('+')), now);
        assert_eq!(app.browser.criteria().max_price, 10.0, "clamped to the ceiling");

        for _ in 0..6 {
            app.handle_key(key(KeyCode::Char('-')), now);
        }
        assert_eq!(app.browser.criteria().max_price, 4.0);
        assert!(app.list.products.is_empty());
    }
}
