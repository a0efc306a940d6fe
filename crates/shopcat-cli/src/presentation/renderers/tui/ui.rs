use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};
use shopcat_runtime::KeyValueStore;

use super::app::AppState;
use super::components::{
    Component, ControlsComponent, DetailComponent, GridComponent, SearchComponent,
    StatusComponent,
};
use super::palette::Palette;

pub(crate) fn draw<S: KeyValueStore>(f: &mut Frame, state: &AppState<S>) {
    let palette = Palette::for_theme(state.browser.theme());

    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    SearchComponent.render(f, chunks[0], state, &palette);
    ControlsComponent.render(f, chunks[1], state, &palette);
    GridComponent.render(f, chunks[2], state, &palette);
    StatusComponent.render(f, chunks[3], state, &palette);

    DetailComponent.render(f, f.area(), state, &palette);
}
