use std::time::Duration;

use reqwest::Client;

use crate::ScrapeError;

/// HTTP client shared by all storefront fetchers.
///
/// One `reqwest::Client` with a fixed per-request timeout and a configured
/// `User-Agent`; every page and endpoint fetch in this crate goes through it.
pub struct SiteClient {
    client: Client,
}

impl SiteClient {
    /// Creates a `SiteClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a page and returns its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] on transport failure and
    /// [`ScrapeError::UnexpectedStatus`] on any non-success status.
    pub(crate) async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }

    /// Fetches a URL and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_page`], plus [`ScrapeError::Deserialize`] when
    /// the body is not valid JSON.
    pub(crate) async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, ScrapeError> {
        let body = self.fetch_page(url).await?;
        serde_json::from_str(&body).map_err(|source| ScrapeError::Deserialize {
            url: url.to_owned(),
            source,
        })
    }
}

/// Resolves a possibly-relative href against the site base address.
///
/// Absolute links are passed through untouched; relative links are joined
/// against the base. Falls back to naive concatenation when the base is not
/// parseable as a URL.
pub(crate) fn join_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_owned();
    }
    match reqwest::Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            href.trim_start_matches('/')
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::join_url;

    #[test]
    fn join_url_passes_absolute_links_through() {
        assert_eq!(
            join_url("https://shop.example.com", "https://other.example.com/p"),
            "https://other.example.com/p"
        );
    }

    #[test]
    fn join_url_resolves_relative_links() {
        assert_eq!(
            join_url("https://shop.example.com", "/pages/privacy"),
            "https://shop.example.com/pages/privacy"
        );
        assert_eq!(
            join_url("https://shop.example.com/", "pages/privacy"),
            "https://shop.example.com/pages/privacy"
        );
    }

    #[test]
    fn join_url_falls_back_on_unparseable_base() {
        assert_eq!(join_url("not a url", "/pages/faq"), "not a url/pages/faq");
    }
}
