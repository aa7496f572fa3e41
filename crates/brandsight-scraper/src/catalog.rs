//! Catalog extraction via the conventional machine-readable endpoint.

use serde_json::Value;

use crate::client::SiteClient;
use crate::ScrapeError;

/// Fetches the storefront's public `products.json` catalog.
///
/// Returns the entries of the `products` array verbatim. A network error,
/// non-success status, non-JSON body, or a body without a `products` array
/// all yield an empty vec; nothing propagates past this boundary.
pub async fn fetch_catalog(client: &SiteClient, base_url: &str) -> Vec<Value> {
    match try_fetch_catalog(client, base_url).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(base_url, error = %e, "catalog fetch failed; treating as empty");
            Vec::new()
        }
    }
}

async fn try_fetch_catalog(client: &SiteClient, base_url: &str) -> Result<Vec<Value>, ScrapeError> {
    let url = format!("{}/products.json", base_url.trim_end_matches('/'));
    let body = client.fetch_json(&url).await?;

    let entries = body
        .get("products")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(entries)
}
