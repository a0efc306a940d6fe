//! # Presentation Layer
//!
//! Everything the user sees, organized as an adaptation of **MVVM**.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!  (Controller)     (Converter)        (Data)          (Driver)   ==(Text)==> [ View ]
//!                                                                 ==(HTML)==> [ HtmlRenderer ]
//!                                                                 ==(TUI)===> [ Component ]
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw data in view models
//! View models carry numbers and unescaped strings. `price: 10.0`, not
//! `"₹10.00"`. JSON output is an API.
//!
//! ### 2. Escaping happens at the edge
//! Product text is untrusted. Views escape for the terminal, the HTML
//! renderer escapes for markup, both through `formatters::escape`. Nothing
//! upstream of a view escapes, so nothing is escaped twice.
//!
//! ### 3. ViewMode is density, not shape
//! * **Minimal:** ids only, for pipes.
//! * **Compact:** one line per product.
//! * **Standard:** cards.
//! * **Verbose:** cards plus image URL and source details.
//!
//! `--format json` ignores `ViewMode` and always dumps the full view model.
//!
//! ## Directory guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Decide which status or tip to show | `presenters/` |
//! | Change colors or layout of text output | `views/` |
//! | Format a price or escape a string | `formatters/` |
//! | Handle a key in the browser | `renderers/tui/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, CreateView, StatusBadge, StatusLevel, Tip, ViewMode};
