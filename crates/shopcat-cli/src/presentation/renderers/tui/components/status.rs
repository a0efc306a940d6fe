use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use shopcat_runtime::KeyValueStore;

use super::Component;
use crate::presentation::formatters::status_line;
use crate::presentation::renderers::tui::app::{AppState, Focus};
use crate::presentation::renderers::tui::palette::Palette;

const GRID_KEYS: &str =
    "/ search  ↑↓ select  ⏎ details  f fav  F favorites  Tab category  s sort  +/- price  r reset  t theme  R reload  q quit";
const SEARCH_KEYS: &str = "type to search  ⌫ delete  ^U clear  ⏎/Esc done";

/// Status line over a key-binding footer
pub(crate) struct StatusComponent;

impl Component for StatusComponent {
    fn render<S: KeyValueStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState<S>,
        palette: &Palette,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status = match &state.notice {
            Some(notice) => Span::styled(notice.clone(), Style::default().fg(palette.error)),
            None if state.list.status.is_failed() => Span::styled(
                status_line(&state.list.status),
                Style::default().fg(palette.error),
            ),
            None => Span::styled(status_line(&state.list.status), Style::default().fg(palette.fg)),
        };
        f.render_widget(Paragraph::new(Line::from(status)), rows[0]);

        let keys = match state.focus {
            Focus::Grid => GRID_KEYS,
            Focus::Search => SEARCH_KEYS,
        };
        f.render_widget(
            Paragraph::new(Span::styled(keys, Style::default().fg(palette.muted))),
            rows[1],
        );
    }
}
