// NOTE: shopcat Architecture
//
// Load once, filter many times:
// - The catalog is fetched once per session (primary endpoint, then one
//   fallback snapshot) and never mutated afterwards.
// - Every user input re-runs the pure pipeline over the immutable catalog.
//   Text input is debounced, discrete controls are not.
//
// Explicit state, no globals:
// - `BrowserState` owns the load state, criteria, favorites and theme.
// - One-shot commands build it, load into it, read from it and exit.
// - The interactive browser keeps it for the whole session and reloads on
//   demand; a reload requested while one is in flight is ignored.
//
// Untrusted text:
// - Titles, categories and descriptions come from a remote service. Every
//   output surface escapes them: HTML entities for the export, control
//   character neutralization for the terminal.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, FavCommand, ThemeCommand};
pub use commands::run;
