//! Contact detail extraction from the page's visible text.

use std::collections::BTreeSet;

use regex::Regex;
use scraper::Html;

use crate::client::SiteClient;
use crate::ScrapeError;

/// Minimum digit count for a phone-number candidate.
const MIN_PHONE_DIGITS: usize = 8;

/// Scrapes email addresses and phone numbers from the home page's visible
/// text.
///
/// Emails and phones are each deduplicated with set semantics (emails first,
/// then phones), but not across the two patterns. Any fetch failure yields
/// an empty vec.
pub async fn fetch_contact_details(client: &SiteClient, base_url: &str) -> Vec<String> {
    match try_fetch_contact_details(client, base_url).await {
        Ok(contacts) => contacts,
        Err(e) => {
            tracing::debug!(base_url, error = %e, "contact fetch failed; treating as empty");
            Vec::new()
        }
    }
}

async fn try_fetch_contact_details(
    client: &SiteClient,
    base_url: &str,
) -> Result<Vec<String>, ScrapeError> {
    let body = client.fetch_page(base_url).await?;
    Ok(extract_contact_details(&body))
}

fn extract_contact_details(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let text = document.root_element().text().collect::<Vec<_>>().join(" ");

    let email_re =
        Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").expect("valid email regex");
    let phone_re = Regex::new(r"\+?\d[\d -]{6,}\d").expect("valid phone regex");

    let emails: BTreeSet<String> = email_re
        .find_iter(&text)
        .map(|m| m.as_str().to_owned())
        .collect();

    let phones: BTreeSet<String> = phone_re
        .find_iter(&text)
        .map(|m| m.as_str().to_owned())
        .filter(|candidate| {
            candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
        })
        .collect();

    emails.into_iter().chain(phones).collect()
}
