use ratatui::{Frame, layout::Rect};
use shopcat_runtime::KeyValueStore;

use super::app::AppState;
use super::palette::Palette;

pub(crate) trait Component {
    fn render<S: KeyValueStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState<S>,
        palette: &Palette,
    );
}

pub(crate) mod controls;
pub(crate) mod detail;
pub(crate) mod grid;
pub(crate) mod search;
pub(crate) mod status;

pub(crate) use controls::ControlsComponent;
pub(crate) use detail::DetailComponent;
pub(crate) use grid::GridComponent;
pub(crate) use search::SearchComponent;
pub(crate) use status::StatusComponent;
