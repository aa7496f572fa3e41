//! Prompt construction for the structuring request.

use brandsight_core::RawSignals;

/// Builds the user prompt: the serialized raw signals plus the desired
/// output shape, including the competitor-suggestion instruction.
pub(crate) fn build_prompt(raw: &RawSignals, site_url: &str) -> String {
    let raw_json = serde_json::to_string(raw).expect("RawSignals serializes to JSON");

    format!(
        "Here is raw data scraped from {site_url}:\n{raw_json}\n\
         Please:\n\
         1. Structure the products (with title, price, image), policies, faqs, \
         contacts, social handles, and about text.\n\
         2. Extract and suggest up to 5 web competitors (ecommerce brands or similar shops).\n\
         Return organized JSON as:\n\
         {{\n\
           \"products_catalog\": [{{\"title\": \"...\", \"price\": \"...\", \"image\": \"...\"}}],\n\
           \"policies\": {{\"privacy\": \"...\", \"refund\": \"...\", \"return\": \"...\"}},\n\
           \"faqs\": [{{\"question\": \"...\", \"answer\": \"...\"}}],\n\
           \"contacts\": [\"...\"],\n\
           \"social_handles\": [\"...\"],\n\
           \"important_links\": [\"...\"],\n\
           \"brand_about\": \"...\",\n\
           \"competitors\": [\"https://brand1.com\", \"https://brand2.com\"]\n\
         }}"
    )
}
