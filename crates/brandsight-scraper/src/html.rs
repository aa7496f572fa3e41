//! Small DOM helpers shared by the HTML-based fetchers.

use scraper::ElementRef;

/// Visible text of an element with whitespace collapsed and trimmed.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
