//! Policy and about text extraction: follow a matching home-page link, then
//! collect the target page's paragraph text.

use scraper::{Html, Selector};

use crate::client::{join_url, SiteClient};
use crate::html::element_text;
use crate::ScrapeError;

/// Fetches the text of the policy page whose home-page anchor text contains
/// `keyword` (case-insensitive).
///
/// Follows the first matching anchor's href (resolved against the base
/// address when relative), fetches that page, and joins its non-empty
/// paragraph texts with newlines. No matching anchor or any fetch failure
/// yields an empty string.
pub async fn fetch_policy_text(client: &SiteClient, base_url: &str, keyword: &str) -> String {
    match try_fetch_linked_paragraphs(client, base_url, keyword).await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(
                base_url,
                keyword,
                error = %e,
                "policy page fetch failed; treating as empty"
            );
            String::new()
        }
    }
}

/// Fetches the brand's about text via the same link-follow strategy as
/// [`fetch_policy_text`], triggered by anchor text containing "about".
pub async fn fetch_about_text(client: &SiteClient, base_url: &str) -> String {
    fetch_policy_text(client, base_url, "about").await
}

async fn try_fetch_linked_paragraphs(
    client: &SiteClient,
    base_url: &str,
    keyword: &str,
) -> Result<String, ScrapeError> {
    let home = client.fetch_page(base_url).await?;
    let Some(href) = find_anchor_by_text(&home, keyword) else {
        return Ok(String::new());
    };

    let target = join_url(base_url, &href);
    let page = client.fetch_page(&target).await?;
    Ok(extract_paragraph_text(&page))
}

/// Returns the href of the first anchor whose visible text contains
/// `keyword`, case-insensitively. Anchors without an href are skipped.
fn find_anchor_by_text(html: &str, keyword: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").expect("valid anchor selector");
    let keyword = keyword.to_lowercase();

    document
        .select(&anchor_selector)
        .filter(|anchor| element_text(anchor).to_lowercase().contains(&keyword))
        .find_map(|anchor| anchor.value().attr("href").map(str::to_owned))
}

/// All non-empty paragraph texts of a page, joined with newlines.
fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph_selector = Selector::parse("p").expect("valid paragraph selector");

    document
        .select(&paragraph_selector)
        .map(|p| element_text(&p))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
