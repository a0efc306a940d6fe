pub mod console;
pub mod html;
pub mod tui;

pub use console::ConsoleRenderer;
pub use html::HtmlRenderer;
pub use tui::TuiRenderer;
