use std::fmt;

use owo_colors::OwoColorize;

use super::favorite_mark;
use crate::presentation::formatters::{
    capitalize, escape_terminal, format_price, status_line, truncate,
};
use crate::presentation::view_models::{
    CategoryListViewModel, CreateView, ExportResultViewModel, LoadStatusViewModel,
    ProductCardViewModel, ProductListViewModel, ViewMode,
};

const LOAD_FAILED_DETAIL: &str = "There was an error fetching products from the API.";
const DEFAULT_WIDTH: usize = 80;

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

impl CreateView for ProductListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProductListView { data: self, mode })
    }
}

struct ProductListView<'a> {
    data: &'a ProductListViewModel,
    mode: ViewMode,
}

impl<'a> ProductListView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for product in &self.data.products {
            writeln!(f, "{}", product.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // id, mark, price and two separators take roughly 24 columns
        let title_width = terminal_width().saturating_sub(24).max(20);

        for product in &self.data.products {
            writeln!(
                f,
                "{:>4} {} {:>10}  {}",
                product.id,
                favorite_mark(product.favorite),
                format_price(&self.data.currency, product.price),
                truncate(&escape_terminal(&product.title), title_width)
            )?;
        }
        Ok(())
    }

    fn render_card(&self, f: &mut fmt::Formatter, product: &ProductCardViewModel) -> fmt::Result {
        let mark = favorite_mark(product.favorite);
        writeln!(
            f,
            "{} {}  {}",
            if product.favorite {
                mark.red().to_string()
            } else {
                mark.to_string()
            },
            format!("#{}", product.id).dimmed(),
            escape_terminal(&product.title).bold()
        )?;
        writeln!(
            f,
            "     {}  {}",
            format_price(&self.data.currency, product.price).green(),
            capitalize(&escape_terminal(&product.category)).dimmed()
        )?;
        if self.mode == ViewMode::Verbose && !product.image.is_empty() {
            writeln!(f, "     {}", escape_terminal(&product.image).dimmed())?;
        }
        Ok(())
    }

    fn render_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filters = &self.data.filters;
        writeln!(f, "{}", "Filters:".bold())?;
        writeln!(f, "  query:          {:?}", escape_terminal(&filters.query))?;
        writeln!(f, "  category:       {}", escape_terminal(&filters.category))?;
        writeln!(
            f,
            "  max price:      {} (ceiling {})",
            format_price(&self.data.currency, filters.max_price),
            format_price(&self.data.currency, filters.price_ceiling)
        )?;
        writeln!(f, "  sort:           {}", filters.sort)?;
        writeln!(f, "  favorites only: {}", filters.favorites_only)?;
        if let Some(source) = &self.data.source {
            writeln!(
                f,
                "  source:         {} ({})",
                escape_terminal(&source.location),
                source.origin
            )?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return self.render_minimal(f);
        }

        let status = status_line(&self.data.status);
        if let LoadStatusViewModel::Failed { reason } = &self.data.status {
            writeln!(f, "{}", status.red().bold())?;
            writeln!(f, "{}", LOAD_FAILED_DETAIL.dimmed())?;
            if self.mode == ViewMode::Verbose {
                writeln!(f, "  {}", escape_terminal(reason))?;
            }
            return Ok(());
        }

        if self.mode == ViewMode::Verbose {
            self.render_filters(f)?;
        }

        writeln!(f, "{}", status.bold())?;
        if self.data.products.is_empty() {
            return Ok(());
        }
        writeln!(f)?;

        if self.mode == ViewMode::Compact {
            return self.render_compact(f);
        }

        for product in &self.data.products {
            self.render_card(f, product)?;
        }
        Ok(())
    }
}

impl CreateView for CategoryListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CategoryListView { data: self, mode })
    }
}

struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.categories.is_empty() {
            if self.mode != ViewMode::Minimal {
                writeln!(f, "No categories")?;
            }
            return Ok(());
        }

        for category in &self.data.categories {
            let name = escape_terminal(&category.name);
            if self.mode == ViewMode::Minimal {
                writeln!(f, "{}", name)?;
                continue;
            }

            let unit = if category.product_count == 1 {
                "product"
            } else {
                "products"
            };
            writeln!(
                f,
                "{:<24} {:>3} {}",
                capitalize(&name),
                category.product_count,
                unit.dimmed()
            )?;
        }
        Ok(())
    }
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportResultView { data: self })
    }
}

struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Wrote {}", self.data.path)
    }
}
