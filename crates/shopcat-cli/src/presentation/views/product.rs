use std::fmt;

use owo_colors::OwoColorize;

use super::favorite_mark;
use crate::presentation::formatters::{capitalize, escape_terminal, format_price};
use crate::presentation::view_models::{
    CreateView, ProductDetailViewModel, RatingViewModel, ViewMode,
};

impl CreateView for ProductDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProductDetailView { data: self, mode })
    }
}

/// `⭐ 4.1 (259)`, or `⭐ N/A (0)` when the record has no rating
pub(crate) fn format_rating(rating: &RatingViewModel) -> String {
    match rating.rate {
        Some(rate) => format!("⭐ {} ({})", rate, rating.count),
        None => format!("⭐ N/A ({})", rating.count),
    }
}

struct ProductDetailView<'a> {
    data: &'a ProductDetailViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ProductDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", data.id);
        }

        writeln!(
            f,
            "{} {}",
            favorite_mark(data.favorite),
            escape_terminal(&data.title).bold()
        )?;
        writeln!(f)?;
        writeln!(f, "  {:<10} {}", "Category:", capitalize(&escape_terminal(&data.category)))?;
        writeln!(
            f,
            "  {:<10} {}",
            "Price:",
            format_price(&data.currency, data.price).green()
        )?;
        writeln!(f, "  {:<10} {}", "Rating:", format_rating(&data.rating))?;

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        if !data.image.is_empty() {
            writeln!(f, "  {:<10} {}", "Image:", escape_terminal(&data.image).dimmed())?;
        }
        if self.mode == ViewMode::Verbose {
            writeln!(f, "  {:<10} {}", "Id:", data.id)?;
        }

        if !data.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "  {}", escape_terminal(&data.description))?;
        }
        Ok(())
    }
}
