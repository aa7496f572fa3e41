//! Aggregation of all per-source fetchers into one raw-signals record.

use brandsight_core::RawSignals;

use crate::client::SiteClient;
use crate::{
    catalog::fetch_catalog, contacts::fetch_contact_details, faq::fetch_faqs,
    hero::fetch_hero_products, links::fetch_important_links, policy::fetch_about_text,
    policy::fetch_policy_text, social::fetch_social_handles,
};

/// Runs every source fetcher for one storefront and assembles the results.
///
/// The fetchers have no data dependency on each other and run concurrently.
/// Each absorbs its own failures, so the returned record always has every
/// field present; the worst case is a record of all-empty fields.
pub async fn collect_insights(client: &SiteClient, base_url: &str) -> RawSignals {
    let (
        products_catalog,
        hero_products,
        privacy_policy,
        refund_policy,
        return_policy,
        faqs,
        social_handles,
        contact_details,
        brand_about,
        important_links,
    ) = tokio::join!(
        fetch_catalog(client, base_url),
        fetch_hero_products(client, base_url),
        fetch_policy_text(client, base_url, "privacy"),
        fetch_policy_text(client, base_url, "refund"),
        fetch_policy_text(client, base_url, "return"),
        fetch_faqs(client, base_url),
        fetch_social_handles(client, base_url),
        fetch_contact_details(client, base_url),
        fetch_about_text(client, base_url),
        fetch_important_links(client, base_url),
    );

    RawSignals {
        products_catalog,
        hero_products,
        privacy_policy,
        refund_policy,
        return_policy,
        faqs,
        social_handles,
        contact_details,
        brand_about,
        important_links,
    }
}
