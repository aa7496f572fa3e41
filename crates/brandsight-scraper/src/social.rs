//! Social handle extraction from home-page anchor hrefs.

use scraper::{Html, Selector};

use crate::client::SiteClient;
use crate::ScrapeError;

/// Known social platform domains matched by containment in anchor hrefs.
const SOCIAL_DOMAINS: &[&str] = &[
    "instagram.com",
    "facebook.com",
    "tiktok.com",
    "twitter.com",
];

/// Scrapes social profile links from the home page.
///
/// Every anchor href containing a known platform domain is returned, in
/// document order, duplicates included — deduplication happens downstream in
/// the structuring step. Any fetch failure yields an empty vec.
pub async fn fetch_social_handles(client: &SiteClient, base_url: &str) -> Vec<String> {
    match try_fetch_social_handles(client, base_url).await {
        Ok(handles) => handles,
        Err(e) => {
            tracing::debug!(base_url, error = %e, "social handle fetch failed; treating as empty");
            Vec::new()
        }
    }
}

async fn try_fetch_social_handles(
    client: &SiteClient,
    base_url: &str,
) -> Result<Vec<String>, ScrapeError> {
    let body = client.fetch_page(base_url).await?;
    Ok(extract_social_handles(&body))
}

fn extract_social_handles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").expect("valid anchor selector");

    document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| SOCIAL_DOMAINS.iter().any(|domain| href.contains(domain)))
        .map(str::to_owned)
        .collect()
}
