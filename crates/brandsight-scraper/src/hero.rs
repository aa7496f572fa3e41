//! Hero-product extraction from the storefront home page.

use scraper::{Html, Selector};

use brandsight_core::HeroProduct;

use crate::client::SiteClient;
use crate::html::element_text;
use crate::ScrapeError;

/// Scrapes hero-product cards from the home page DOM.
///
/// Every card matching the grid-product marker is emitted; a card missing a
/// title, price, or image sub-element keeps `None` for that field rather
/// than being dropped. Any fetch failure yields an empty vec.
pub async fn fetch_hero_products(client: &SiteClient, base_url: &str) -> Vec<HeroProduct> {
    match try_fetch_hero_products(client, base_url).await {
        Ok(products) => products,
        Err(e) => {
            tracing::debug!(base_url, error = %e, "hero product fetch failed; treating as empty");
            Vec::new()
        }
    }
}

async fn try_fetch_hero_products(
    client: &SiteClient,
    base_url: &str,
) -> Result<Vec<HeroProduct>, ScrapeError> {
    let body = client.fetch_page(base_url).await?;
    Ok(extract_hero_products(&body))
}

fn extract_hero_products(html: &str) -> Vec<HeroProduct> {
    let document = Html::parse_document(html);
    let card_selector =
        Selector::parse("div.grid-product__content").expect("valid hero card selector");
    let title_selector =
        Selector::parse("div.grid-product__title").expect("valid hero title selector");
    let price_selector =
        Selector::parse("div.grid-product__price").expect("valid hero price selector");
    let image_selector = Selector::parse("img").expect("valid hero image selector");

    document
        .select(&card_selector)
        .map(|card| HeroProduct {
            title: card
                .select(&title_selector)
                .next()
                .map(|el| element_text(&el)),
            price: card
                .select(&price_selector)
                .next()
                .map(|el| element_text(&el)),
            image: card
                .select(&image_selector)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::to_owned),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::extract_hero_products;

    #[test]
    fn extracts_full_cards() {
        let html = r#"
            <div class="grid-product__content">
              <div class="grid-product__title">  Ceramic   Mug </div>
              <div class="grid-product__price">$10</div>
              <img src="/img/mug.jpg">
            </div>
        "#;
        let products = extract_hero_products(html);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title.as_deref(), Some("Ceramic Mug"));
        assert_eq!(products[0].price.as_deref(), Some("$10"));
        assert_eq!(products[0].image.as_deref(), Some("/img/mug.jpg"));
    }

    #[test]
    fn missing_sub_elements_yield_none_without_dropping_the_card() {
        let html = r#"
            <div class="grid-product__content">
              <div class="grid-product__title">Tote Bag</div>
            </div>
        "#;
        let products = extract_hero_products(html);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title.as_deref(), Some("Tote Bag"));
        assert!(products[0].price.is_none());
        assert!(products[0].image.is_none());
    }

    #[test]
    fn no_cards_yield_empty_vec() {
        assert!(extract_hero_products("<html><body></body></html>").is_empty());
    }
}
