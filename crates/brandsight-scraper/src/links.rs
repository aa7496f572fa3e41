//! Important navigational link extraction from home-page anchors.

use scraper::{Html, Selector};

use crate::client::SiteClient;
use crate::html::element_text;
use crate::ScrapeError;

/// Anchor-text keywords marking a link as important.
const LINK_KEYWORDS: &[&str] = &["order", "track", "contact", "blog"];

/// Scrapes navigational links whose visible text contains one of the
/// important-link keywords.
///
/// Matching hrefs are returned verbatim — not resolved against the base
/// address. Any fetch failure yields an empty vec.
pub async fn fetch_important_links(client: &SiteClient, base_url: &str) -> Vec<String> {
    match try_fetch_important_links(client, base_url).await {
        Ok(links) => links,
        Err(e) => {
            tracing::debug!(base_url, error = %e, "important link fetch failed; treating as empty");
            Vec::new()
        }
    }
}

async fn try_fetch_important_links(
    client: &SiteClient,
    base_url: &str,
) -> Result<Vec<String>, ScrapeError> {
    let body = client.fetch_page(base_url).await?;
    Ok(extract_important_links(&body))
}

fn extract_important_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").expect("valid anchor selector");

    document
        .select(&anchor_selector)
        .filter(|anchor| {
            let text = element_text(anchor).to_lowercase();
            LINK_KEYWORDS.iter().any(|keyword| text.contains(keyword))
        })
        .filter_map(|anchor| anchor.value().attr("href").map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::extract_important_links;

    #[test]
    fn matches_keyword_anchor_text_and_keeps_href_verbatim() {
        let html = r#"
            <a href="/pages/track-order">Track your order</a>
            <a href="/pages/shipping">Shipping</a>
            <a href="/blogs/news">Blog</a>
        "#;
        let links = extract_important_links(html);
        assert_eq!(links, vec!["/pages/track-order", "/blogs/news"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let html = r#"<a href="/contact-us">CONTACT US</a>"#;
        assert_eq!(extract_important_links(html), vec!["/contact-us"]);
    }
}
