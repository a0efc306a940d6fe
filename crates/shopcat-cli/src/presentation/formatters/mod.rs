pub mod escape;
pub mod money;
pub mod status;
pub mod text;

pub use escape::{escape_html, escape_terminal};
pub use money::format_price;
pub use status::status_line;
pub use text::{capitalize, truncate};
