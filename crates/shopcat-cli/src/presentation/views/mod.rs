//! Text views. Each module implements `CreateView` for its view models.
//!
//! Product text is untrusted: every string that came from the catalog goes
//! through `escape_terminal` before it is written.

mod catalog;
mod init;
mod preferences;
mod product;

pub(crate) use product::format_rating;

pub(crate) const FAVORITE_MARK: &str = "♥";
pub(crate) const NOT_FAVORITE_MARK: &str = "♡";

pub(crate) fn favorite_mark(favorite: bool) -> &'static str {
    if favorite {
        FAVORITE_MARK
    } else {
        NOT_FAVORITE_MARK
    }
}
