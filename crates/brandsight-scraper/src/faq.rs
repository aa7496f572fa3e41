//! FAQ extraction from the conventional home-page FAQ section.

use scraper::{Html, Selector};

use brandsight_core::FaqEntry;

use crate::client::SiteClient;
use crate::html::element_text;
use crate::ScrapeError;

/// Scrapes question/answer pairs from the home page's FAQ section.
///
/// The section is located by the conventional `section.faq` / `#faq`
/// markers; each `.faq-item` inside contributes a pair from its `.question`
/// and `.answer` sub-elements. Items missing either part are skipped. No
/// section or any fetch failure yields an empty vec.
pub async fn fetch_faqs(client: &SiteClient, base_url: &str) -> Vec<FaqEntry> {
    match try_fetch_faqs(client, base_url).await {
        Ok(faqs) => faqs,
        Err(e) => {
            tracing::debug!(base_url, error = %e, "faq fetch failed; treating as empty");
            Vec::new()
        }
    }
}

async fn try_fetch_faqs(client: &SiteClient, base_url: &str) -> Result<Vec<FaqEntry>, ScrapeError> {
    let body = client.fetch_page(base_url).await?;
    Ok(extract_faqs(&body))
}

fn extract_faqs(html: &str) -> Vec<FaqEntry> {
    let document = Html::parse_document(html);
    let section_selector =
        Selector::parse("section.faq, #faq").expect("valid faq section selector");
    let item_selector =
        Selector::parse("div.faq-item, li.faq-item").expect("valid faq item selector");
    let question_selector = Selector::parse(".question").expect("valid question selector");
    let answer_selector = Selector::parse(".answer").expect("valid answer selector");

    let Some(section) = document.select(&section_selector).next() else {
        return Vec::new();
    };

    section
        .select(&item_selector)
        .filter_map(|item| {
            let question = item.select(&question_selector).next()?;
            let answer = item.select(&answer_selector).next()?;
            Some(FaqEntry {
                question: element_text(&question),
                answer: element_text(&answer),
            })
        })
        .collect()
}
