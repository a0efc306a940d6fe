//! Neutralizing untrusted product text for each output surface.
//!
//! Titles, categories, descriptions and image URLs come from a remote
//! service and must never be interpreted as markup or terminal control
//! sequences. Callers escape at the point of output and nowhere else.

/// Escape the five characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Replace control characters so text cannot move the cursor, change
/// colors or otherwise drive the terminal.
///
/// ESC and every other C0/C1 control become U+FFFD. Tabs and newlines
/// become a single space, since product fields are single-line by nature.
pub fn escape_terminal(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c if c.is_control() => char::REPLACEMENT_CHARACTER,
            c => c,
        })
        .collect()
}
