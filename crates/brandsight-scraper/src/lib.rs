//! Per-source storefront fetchers and their aggregator.
//!
//! Each fetcher extracts one signal type from a storefront and absorbs its
//! own failures: network errors, non-success statuses, and missing markup
//! all collapse to the empty value for the fetcher's result type. Storefront
//! heterogeneity makes partial extraction failure the expected case, so the
//! boundary of every fetcher is infallible by contract —
//! [`collect_insights`] always produces a complete record.

mod catalog;
mod client;
mod contacts;
mod faq;
mod hero;
mod html;
mod insights;
mod links;
mod policy;
mod social;

pub use catalog::fetch_catalog;
pub use client::SiteClient;
pub use contacts::fetch_contact_details;
pub use faq::fetch_faqs;
pub use hero::fetch_hero_products;
pub use insights::collect_insights;
pub use links::fetch_important_links;
pub use policy::{fetch_about_text, fetch_policy_text};
pub use social::fetch_social_handles;

use thiserror::Error;

/// Failure inside a single fetcher, before absorption at the fetcher boundary.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {url}: {source}")]
    Deserialize {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
