use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use shopcat_runtime::KeyValueStore;
use shopcat_types::CategoryFilter;

use super::Component;
use crate::presentation::formatters::{capitalize, escape_terminal, format_price};
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::renderers::tui::palette::Palette;

/// One line summarizing category, sort, price ceiling and the favorites filter
pub(crate) struct ControlsComponent;

impl Component for ControlsComponent {
    fn render<S: KeyValueStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState<S>,
        palette: &Palette,
    ) {
        let criteria = state.browser.criteria();
        let label = Style::default().fg(palette.muted);
        let value = Style::default().fg(palette.fg).add_modifier(Modifier::BOLD);

        let category = match &criteria.category {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Exact(name) => capitalize(&escape_terminal(name)),
        };
        let favorites = if criteria.favorites_only { "♥ only" } else { "off" };

        let line = Line::from(vec![
            Span::styled(" Category ", label),
            Span::styled(category, value),
            Span::styled("   Sort ", label),
            Span::styled(criteria.sort.label(), value),
            Span::styled("   Max ", label),
            Span::styled(format_price(&state.currency, criteria.max_price), value),
            Span::styled(
                format!(" / {}", format_price(&state.currency, state.browser.price_ceiling())),
                label,
            ),
            Span::styled("   Favorites ", label),
            Span::styled(favorites, value),
            Span::styled("   Theme ", label),
            Span::styled(state.browser.theme().as_str(), value),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }
}
