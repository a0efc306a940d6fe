use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use shopcat_runtime::KeyValueStore;

use super::Component;
use crate::presentation::formatters::{capitalize, escape_terminal, format_price};
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::renderers::tui::palette::Palette;
use crate::presentation::views::{favorite_mark, format_rating};

/// Pop-up over the grid with one product's full record
pub(crate) struct DetailComponent;

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

impl Component for DetailComponent {
    fn render<S: KeyValueStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState<S>,
        palette: &Palette,
    ) {
        let Some(detail) = &state.detail else {
            return;
        };

        let label = Style::default().fg(palette.muted);
        let value = Style::default().fg(palette.fg);

        let mut lines = vec![
            Line::from(Span::styled(
                escape_terminal(&detail.title),
                value.add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Category  ", label),
                Span::styled(capitalize(&escape_terminal(&detail.category)), value),
            ]),
            Line::from(vec![
                Span::styled("Price     ", label),
                Span::styled(
                    format_price(&detail.currency, detail.price),
                    Style::default().fg(palette.price),
                ),
            ]),
            Line::from(vec![
                Span::styled("Rating    ", label),
                Span::styled(format_rating(&detail.rating), value),
            ]),
            Line::from(vec![
                Span::styled("Favorite  ", label),
                Span::styled(favorite_mark(detail.favorite), Style::default().fg(palette.accent)),
            ]),
        ];
        if !detail.image.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Image     ", label),
                Span::styled(escape_terminal(&detail.image), label),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            escape_terminal(&detail.description),
            value,
        )));

        let popup = centered(area, 70, 70);
        let widget = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(palette.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .title(Span::styled(
                        " Details · f favorite · Esc close ",
                        Style::default().fg(palette.muted),
                    )),
            );

        f.render_widget(Clear, popup);
        f.render_widget(widget, popup);
    }
}
