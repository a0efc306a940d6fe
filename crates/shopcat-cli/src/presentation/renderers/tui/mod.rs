//! Interactive catalog browser.
//!
//! The event loop owns the `AppState` on the main thread. Loads run on a
//! worker thread that blocks on a shared current-thread runtime and reports
//! back over a channel, so input keeps flowing while "Loading products..."
//! is on screen.

mod app;
mod components;
mod palette;
mod tui_event;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use shopcat_providers::ProductSource;
use shopcat_runtime::{BrowserState, CatalogLoader, KeyValueStore, LoadTicket};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use app::{Action, AppState};
pub use tui_event::TuiEvent;

const TICK_RATE: Duration = Duration::from_millis(250);

pub struct TuiRenderer<P, F> {
    loader: CatalogLoader<P, F>,
    runtime: Arc<Runtime>,
    currency: String,
    debounce: Duration,
}

impl<P, F> TuiRenderer<P, F>
where
    P: ProductSource + Clone + 'static,
    F: ProductSource + Clone + 'static,
{
    pub fn new(loader: CatalogLoader<P, F>, currency: String, debounce: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;

        Ok(Self {
            loader,
            runtime: Arc::new(runtime),
            currency,
            debounce,
        })
    }

    fn spawn_load(&self, ticket: LoadTicket, tx: Sender<TuiEvent>) {
        let loader = self.loader.clone();
        let runtime = Arc::clone(&self.runtime);

        debug!(?ticket, "starting background load");
        thread::spawn(move || {
            let result = runtime.block_on(loader.load());
            // The receiver is gone once the browser has quit
            let _ = tx.send(TuiEvent::LoadFinished(ticket, result));
        });
    }

    pub fn run<S: KeyValueStore>(&self, browser: BrowserState<S>) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let mut app = AppState::new(browser, self.currency.clone(), self.debounce);

        if let Some(ticket) = app.begin_load() {
            self.spawn_load(ticket, tx.clone());
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        info!("browser started");
        let result = self.event_loop(&mut terminal, &mut app, &tx, &rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("browser closed");

        result
    }

    fn event_loop<B: Backend, S: KeyValueStore>(
        &self,
        terminal: &mut Terminal<B>,
        app: &mut AppState<S>,
        tx: &Sender<TuiEvent>,
        rx: &Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, app))?;

            // Wake up in time for a pending debounced search
            let timeout = app
                .debouncer
                .deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(TICK_RATE)
                .min(TICK_RATE);

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match app.handle_key(key, Instant::now()) {
                    Some(Action::Quit) => return Ok(()),
                    Some(Action::Reload) => {
                        if let Some(ticket) = app.begin_load() {
                            self.spawn_load(ticket, tx.clone());
                        }
                    }
                    None => {}
                }
            }

            app.tick(Instant::now());

            while let Ok(TuiEvent::LoadFinished(ticket, result)) = rx.try_recv() {
                app.finish_load(ticket, result);
            }
        }
    }
}
