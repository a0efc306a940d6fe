use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use shopcat_runtime::KeyValueStore;

use super::Component;
use crate::presentation::formatters::{capitalize, escape_terminal, format_price};
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::renderers::tui::palette::Palette;
use crate::presentation::view_models::LoadStatusViewModel;
use crate::presentation::views::favorite_mark;

const LOAD_FAILED_DETAIL: &str =
    "There was an error fetching products from the API. Press R to retry.";

pub(crate) struct GridComponent;

impl Component for GridComponent {
    fn render<S: KeyValueStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState<S>,
        palette: &Palette,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(" Products ", Style::default().fg(palette.muted)));

        let products = &state.list.products;
        if products.is_empty() {
            let (text, color) = match &state.list.status {
                LoadStatusViewModel::Failed { .. } => (LOAD_FAILED_DETAIL, palette.error),
                LoadStatusViewModel::Loading => ("Loading products...", palette.muted),
                LoadStatusViewModel::NotLoaded => ("Press R to load products", palette.muted),
                _ => ("No products match these filters", palette.muted),
            };
            let widget = Paragraph::new(Span::styled(text, Style::default().fg(color)))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(widget, area);
            return;
        }

        let items: Vec<ListItem> = products
            .iter()
            .map(|p| {
                let mark_style = if p.favorite {
                    Style::default().fg(palette.accent)
                } else {
                    Style::default().fg(palette.muted)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", favorite_mark(p.favorite)), mark_style),
                    Span::styled(
                        format!("{:>10}  ", format_price(&state.currency, p.price)),
                        Style::default().fg(palette.price),
                    ),
                    Span::styled(escape_terminal(&p.title), Style::default().fg(palette.fg)),
                    Span::styled(
                        format!("  {}", capitalize(&escape_terminal(&p.category))),
                        Style::default().fg(palette.muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

        // Clamp against the data in case the state is ahead of it
        let mut list_state = ListState::default();
        list_state.select(Some(state.selected.min(products.len() - 1)));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
