//! Static HTML export of the product grid.
//!
//! Every catalog string is passed through `escape_html`, both in text
//! content and in attribute values. Image URLs are additionally restricted
//! to `http(s)` so a record cannot smuggle in a `javascript:` source.

use std::fmt;

use shopcat_types::Theme;

use crate::presentation::formatters::{capitalize, escape_html, format_price, status_line};
use crate::presentation::view_models::{
    LoadStatusViewModel, ProductCardViewModel, ProductListViewModel,
};
use crate::presentation::views::favorite_mark;

const STYLE: &str = r#"
:root { --bg: #f7f7f8; --fg: #1b1b1f; --card: #ffffff; --muted: #6b6b76; --accent: #d6336c; }
[data-theme="dark"] { --bg: #141417; --fg: #ececf1; --card: #1f1f24; --muted: #9a9aa6; --accent: #ff6b9a; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
header { padding: 16px 24px; }
.status { color: var(--muted); }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; padding: 0 24px 24px; }
.card { background: var(--card); border-radius: 8px; padding: 12px; display: flex; flex-direction: column; gap: 6px; }
.thumb img { width: 100%; height: 160px; object-fit: contain; }
.meta { display: flex; justify-content: space-between; }
.muted { color: var(--muted); }
.fav { color: var(--accent); }
"#;

pub struct HtmlRenderer {
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render_page(&self, list: &ProductListViewModel) -> String {
        HtmlPage {
            data: list,
            theme: self.theme,
        }
        .to_string()
    }
}

fn safe_image_url(url: &str) -> Option<&str> {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(url.trim_start())
    } else {
        None
    }
}

struct HtmlPage<'a> {
    data: &'a ProductListViewModel,
    theme: Theme,
}

impl<'a> HtmlPage<'a> {
    fn render_card(&self, f: &mut fmt::Formatter, product: &ProductCardViewModel) -> fmt::Result {
        let title = escape_html(&product.title);

        writeln!(f, "  <article class=\"card\" data-id=\"{}\">", product.id)?;
        if let Some(src) = safe_image_url(&product.image) {
            writeln!(
                f,
                "    <div class=\"thumb\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
                escape_html(src),
                title
            )?;
        }
        writeln!(f, "    <div class=\"title\" title=\"{}\">{}</div>", title, title)?;
        writeln!(f, "    <div class=\"meta\">")?;
        writeln!(
            f,
            "      <div class=\"price\">{}</div>",
            escape_html(&format_price(&self.data.currency, product.price))
        )?;
        writeln!(
            f,
            "      <div class=\"small muted\">{}</div>",
            escape_html(&capitalize(&product.category))
        )?;
        writeln!(f, "    </div>")?;
        writeln!(
            f,
            "    <div class=\"fav\">{}</div>",
            favorite_mark(product.favorite)
        )?;
        writeln!(f, "  </article>")
    }
}

impl<'a> fmt::Display for HtmlPage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<!doctype html>")?;
        writeln!(f, "<html lang=\"en\" data-theme=\"{}\">", self.theme)?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>Product catalog</title>")?;
        writeln!(f, "<style>{}</style>", STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<header>")?;
        writeln!(f, "  <h1>Product catalog</h1>")?;
        writeln!(
            f,
            "  <div class=\"status\">{}</div>",
            escape_html(&status_line(&self.data.status))
        )?;
        writeln!(f, "</header>")?;

        writeln!(f, "<main class=\"grid\">")?;
        if let LoadStatusViewModel::Failed { .. } = self.data.status {
            writeln!(
                f,
                "  <div class=\"muted\">There was an error fetching products from the API.</div>"
            )?;
        }
        for product in &self.data.products {
            self.render_card(f, product)?;
        }
        writeln!(f, "</main>")?;

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
