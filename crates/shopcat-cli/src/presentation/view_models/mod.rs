pub mod catalog;
pub mod common;
pub mod init;
pub mod preferences;
pub mod product;
pub mod result;

pub use catalog::*;
pub use common::*;
pub use init::*;
pub use preferences::*;
pub use product::*;
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
