//! Integration tests for the storefront fetchers and the aggregator.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. The absorbed-failure contract is exercised
//! directly: simulated network failures and malformed markup must yield each
//! fetcher's empty value and never an error.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brandsight_scraper::{
    collect_insights, fetch_catalog, fetch_contact_details, fetch_faqs, fetch_hero_products,
    fetch_important_links, fetch_policy_text, fetch_social_handles, SiteClient,
};

/// Builds a `SiteClient` suitable for tests: short timeout, descriptive UA.
fn test_client() -> SiteClient {
    SiteClient::new(5, "brandsight-test/0.1").expect("failed to build test SiteClient")
}

/// A base address nothing listens on; connections are refused immediately.
const DEAD_SERVER: &str = "http://127.0.0.1:9";

const HOME_PAGE: &str = r#"
    <html><body>
      <div class="grid-product__content">
        <div class="grid-product__title">Ceramic Mug</div>
        <div class="grid-product__price">$10</div>
        <img src="/img/mug.jpg">
      </div>
      <a href="/pages/privacy">Privacy Policy</a>
      <a href="https://instagram.com/examplebrand">Instagram</a>
      <a href="/pages/track">Track your order</a>
      <section class="faq">
        <div class="faq-item">
          <div class="question">Do you ship abroad?</div>
          <div class="answer">Yes, worldwide.</div>
        </div>
      </section>
      <footer>support@example.com · +1 555 010 9999</footer>
    </body></html>
"#;

async fn mount_home(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_returns_entries_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "products": [{"title": "Mug", "price": "$10"}]
        })))
        .mount(&server)
        .await;

    let entries = fetch_catalog(&test_client(), &server.uri()).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Mug");
    assert_eq!(entries[0]["price"], "$10");
}

#[tokio::test]
async fn catalog_absorbs_bad_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(fetch_catalog(&test_client(), &server.uri()).await.is_empty());
}

#[tokio::test]
async fn catalog_absorbs_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    assert!(fetch_catalog(&test_client(), &server.uri()).await.is_empty());
}

#[tokio::test]
async fn catalog_treats_missing_products_key_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"items": []})))
        .mount(&server)
        .await;

    assert!(fetch_catalog(&test_client(), &server.uri()).await.is_empty());
}

// ---------------------------------------------------------------------------
// Policy link-follow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn policy_text_follows_relative_link_and_joins_paragraphs() {
    let server = MockServer::start().await;
    mount_home(&server, HOME_PAGE).await;

    Mock::given(method("GET"))
        .and(path("/pages/privacy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>We respect your data.</p></body></html>"),
        )
        .mount(&server)
        .await;

    let text = fetch_policy_text(&test_client(), &server.uri(), "privacy").await;
    assert_eq!(text, "We respect your data.");
}

#[tokio::test]
async fn policy_text_is_empty_when_no_anchor_matches() {
    let server = MockServer::start().await;
    mount_home(&server, HOME_PAGE).await;

    let text = fetch_policy_text(&test_client(), &server.uri(), "refund").await;
    assert!(text.is_empty());
}

#[tokio::test]
async fn policy_text_absorbs_broken_policy_page() {
    let server = MockServer::start().await;
    mount_home(&server, HOME_PAGE).await;

    Mock::given(method("GET"))
        .and(path("/pages/privacy"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let text = fetch_policy_text(&test_client(), &server.uri(), "privacy").await;
    assert!(text.is_empty());
}

// ---------------------------------------------------------------------------
// Home-page fetchers against one storefront fixture
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_fetchers_extract_their_signals() {
    let server = MockServer::start().await;
    mount_home(&server, HOME_PAGE).await;

    let client = test_client();

    let heroes = fetch_hero_products(&client, &server.uri()).await;
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].title.as_deref(), Some("Ceramic Mug"));

    let faqs = fetch_faqs(&client, &server.uri()).await;
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].answer, "Yes, worldwide.");

    let socials = fetch_social_handles(&client, &server.uri()).await;
    assert_eq!(socials, vec!["https://instagram.com/examplebrand"]);

    let links = fetch_important_links(&client, &server.uri()).await;
    assert_eq!(links, vec!["/pages/track"]);

    let contacts = fetch_contact_details(&client, &server.uri()).await;
    assert!(contacts.contains(&"support@example.com".to_owned()));
    assert!(contacts.iter().any(|c| c.starts_with("+1 555")));
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collect_insights_assembles_all_signals() {
    let server = MockServer::start().await;
    mount_home(&server, HOME_PAGE).await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "products": [{"title": "Mug", "price": "$10"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/privacy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>We respect your data.</p></body></html>"),
        )
        .mount(&server)
        .await;

    let raw = collect_insights(&test_client(), &server.uri()).await;

    assert_eq!(raw.products_catalog.len(), 1);
    assert_eq!(raw.products_catalog[0]["title"], "Mug");
    assert_eq!(raw.products_catalog[0]["price"], "$10");
    assert_eq!(raw.hero_products.len(), 1);
    assert_eq!(raw.privacy_policy, "We respect your data.");
    assert!(raw.refund_policy.is_empty());
    assert!(raw.return_policy.is_empty());
    assert_eq!(raw.faqs.len(), 1);
    assert_eq!(raw.social_handles.len(), 1);
    assert!(!raw.contact_details.is_empty());
    assert!(raw.brand_about.is_empty());
    assert_eq!(raw.important_links, vec!["/pages/track"]);
}

#[tokio::test]
async fn collect_insights_degrades_to_all_empty_on_unreachable_site() {
    let raw = collect_insights(&test_client(), DEAD_SERVER).await;

    assert!(raw.products_catalog.is_empty());
    assert!(raw.hero_products.is_empty());
    assert!(raw.privacy_policy.is_empty());
    assert!(raw.refund_policy.is_empty());
    assert!(raw.return_policy.is_empty());
    assert!(raw.faqs.is_empty());
    assert!(raw.social_handles.is_empty());
    assert!(raw.contact_details.is_empty());
    assert!(raw.brand_about.is_empty());
    assert!(raw.important_links.is_empty());
}
