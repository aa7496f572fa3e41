//! Shared record types flowing through the extraction pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One hero-product card scraped from the storefront home page.
///
/// Cards are emitted even when sub-elements are missing; absent title, price,
/// or image become `None` rather than dropping the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroProduct {
    pub title: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

/// One question/answer pair from a storefront FAQ section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Raw, per-source extraction output for one storefront, before structuring.
///
/// Every field is present even when its fetcher failed: absence of data and
/// fetch failure both collapse to the empty value at this layer. Catalog
/// entries are carried verbatim as JSON values — the structuring service,
/// not this layer, decides which fields matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSignals {
    pub products_catalog: Vec<Value>,
    pub hero_products: Vec<HeroProduct>,
    pub privacy_policy: String,
    pub refund_policy: String,
    pub return_policy: String,
    pub faqs: Vec<FaqEntry>,
    pub social_handles: Vec<String>,
    pub contact_details: Vec<String>,
    pub brand_about: String,
    pub important_links: Vec<String>,
}

/// Product entry in the structured record.
///
/// Only `title` gates persistence; price and image may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Policy texts keyed by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySet {
    #[serde(default)]
    pub privacy: String,
    #[serde(default)]
    pub refund: String,
    #[serde(default, rename = "return")]
    pub return_policy: String,
}

/// The structuring service's normalized output for one storefront.
///
/// The service may omit any field; every field defaults to empty so a sparse
/// response still deserializes. `competitors` holds up to five suggested
/// competitor addresses in the order the service produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredInsights {
    #[serde(default)]
    pub products_catalog: Vec<StructuredProduct>,
    #[serde(default)]
    pub hero_products: Vec<StructuredProduct>,
    #[serde(default)]
    pub policies: PolicySet,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    #[serde(default)]
    pub contacts: Vec<String>,
    #[serde(default)]
    pub social_handles: Vec<String>,
    #[serde(default)]
    pub brand_about: String,
    #[serde(default)]
    pub important_links: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
}
