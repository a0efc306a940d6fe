use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use shopcat_runtime::KeyValueStore;

use super::Component;
use crate::presentation::formatters::escape_terminal;
use crate::presentation::renderers::tui::app::{AppState, Focus};
use crate::presentation::renderers::tui::palette::Palette;

pub(crate) struct SearchComponent;

impl Component for SearchComponent {
    fn render<S: KeyValueStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState<S>,
        palette: &Palette,
    ) {
        let focused = state.focus == Focus::Search;
        let border = if focused { palette.accent } else { palette.border };
        let query = escape_terminal(&state.browser.criteria().query);

        let line = if query.is_empty() && !focused {
            Line::from(Span::styled(
                "Press / to search titles",
                Style::default().fg(palette.muted),
            ))
        } else {
            let mut spans = vec![Span::styled(query, Style::default().fg(palette.fg))];
            if focused {
                spans.push(Span::styled(
                    "▏",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(Span::styled(" Search ", Style::default().fg(palette.muted))),
        );
        f.render_widget(widget, area);
    }
}
